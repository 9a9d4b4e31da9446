//! Inbound HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, trace + timeout layers)
//!     → handler (parse path/body, call EmployeeService)
//!     → response.rs (map errors to 404 / 400 / 502)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{AppState, HttpServer};
