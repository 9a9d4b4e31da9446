//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum router with every employee route
//! - Wire up middleware (tracing, inbound timeout)
//! - Bind the server to a listener and serve until shutdown
//! - Translate service results into HTTP responses
//!
//! # Design Decisions
//! - Routes mirror the upstream's public surface under /api/v1/employee
//! - The inbound timeout must outlast the retry window, or the gateway
//!   would cancel its own backoff sleeps
//! - Handlers share one EmployeeService (and its pooled reqwest client)
//!   through cloned state; no other state exists between requests

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::response::ApiError;
use crate::model::{Employee, EmployeeInput};
use crate::service::{DeleteOutcome, EmployeeService};
use crate::upstream::{EmployeeClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

/// HTTP server for the employee gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the underlying reqwest client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = EmployeeClient::new(&config.upstream, &config.retries)?;
        let service = EmployeeService::new(client);

        let router = Self::build_router(&config, AppState { service });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/", get(get_all_employees).post(create_employee))
            .route("/search/{fragment}", get(search_employees))
            .route("/highestSalary", get(highest_salary))
            .route(
                "/topTenHighestEarningEmployeeNames",
                get(top_earning_employee_names),
            )
            .route(
                "/{id}",
                get(get_employee_by_id).delete(delete_employee_by_id),
            )
            .with_state(state);

        Router::new()
            .nest("/api/v1/employee", api)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn get_all_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.service.list_all().await?;
    Ok(Json(employees))
}

async fn search_employees(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let matches = state.service.search(&fragment).await?;
    tracing::debug!(fragment = %fragment, matches = matches.len(), "Name search complete");
    Ok(Json(matches))
}

async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    match state.service.get_by_id(&id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ApiError::NotFound),
    }
}

async fn highest_salary(State(state): State<AppState>) -> Result<Json<u32>, ApiError> {
    let salary = state.service.highest_salary().await?;
    Ok(Json(salary))
}

async fn top_earning_employee_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.service.top_earner_names().await?;
    Ok(Json(names))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, ApiError> {
    match state.service.create(&input).await {
        Ok(employee) => {
            tracing::info!(id = %employee.id, name = %employee.name, "Employee created");
            Ok(Json(employee))
        }
        // A client-error status on a write attempt means the upstream
        // rejected the input, not that it was rate limiting.
        Err(UpstreamError::Exhausted { status, .. }) if status.is_client_error() => {
            Err(ApiError::InvalidInput(format!(
                "upstream rejected employee input ({status})"
            )))
        }
        Err(UpstreamError::MissingData(message)) => Err(ApiError::InvalidInput(
            message.unwrap_or_else(|| "upstream rejected employee input".to_string()),
        )),
        Err(e) => Err(ApiError::Upstream(e)),
    }
}

async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    match state.service.delete_by_id(&id).await? {
        DeleteOutcome::Deleted { .. } => Ok("Employee deleted successfully"),
        DeleteOutcome::NotFound => Err(ApiError::NotFound),
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
