//! Employee Gateway
//!
//! A stateless HTTP façade over an external employee-record service,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                EMPLOYEE GATEWAY                │
//!                    │                                               │
//!   Client Request   │  ┌────────┐    ┌─────────┐    ┌───────────┐  │
//!   ─────────────────┼─▶│  http  │───▶│ service │───▶│ upstream  │──┼──▶ Employee
//!                    │  │ server │    │aggregate│    │  client   │  │    Record API
//!                    │  └────────┘    └─────────┘    └─────┬─────┘  │
//!                    │                                     │        │
//!                    │                              ┌──────▼─────┐  │
//!                    │                              │ resilience │  │
//!                    │                              │retry/backoff│ │
//!                    │                              └────────────┘  │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │   config (TOML)   ·   observability     │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```
//!
//! The upstream rate-limits at random, so every read is wrapped in an
//! exponential-backoff retry loop; writes get a single attempt by default.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_gateway::config::{load_config, GatewayConfig};
use employee_gateway::http::HttpServer;

#[derive(Parser)]
#[command(name = "employee-gateway")]
#[command(about = "HTTP facade over the employee-record service", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults apply if omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("employee-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        max_attempts = config.retries.max_attempts,
        retry_writes = config.retries.retry_writes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
