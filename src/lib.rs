//! Employee Gateway Library

pub mod config;
pub mod http;
pub mod model;
pub mod resilience;
pub mod service;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use service::EmployeeService;
pub use upstream::EmployeeClient;
