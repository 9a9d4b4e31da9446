//! Employee service orchestration.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → EmployeeService (fetch snapshot via upstream client)
//!     → aggregate.rs (pure filtering / max / top-N over the snapshot)
//!     → typed result back to the handler
//! ```
//!
//! # Design Decisions
//! - Every operation takes a fresh snapshot; no caching, so two calls may
//!   observe different upstream states
//! - delete-by-id resolves id → name first, because the upstream only
//!   deletes by name; a missing id never reaches the delete endpoint

pub mod aggregate;

use crate::model::{Employee, EmployeeInput};
use crate::upstream::{EmployeeClient, UpstreamError};

/// How many names the top-earners view returns.
pub const TOP_EARNER_COUNT: usize = 10;

/// Outcome of a delete-by-id request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The upstream confirmed removing exactly one record.
    Deleted { name: String },
    /// The id resolved to nothing, or the upstream did not confirm.
    NotFound,
}

/// Stateless orchestration over the upstream client.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    client: EmployeeClient,
}

impl EmployeeService {
    pub fn new(client: EmployeeClient) -> Self {
        Self { client }
    }

    /// All employees, in upstream order.
    pub async fn list_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        self.client.list_all().await
    }

    /// Employees whose name contains `fragment`, case-insensitively.
    pub async fn search(&self, fragment: &str) -> Result<Vec<Employee>, UpstreamError> {
        let snapshot = self.client.list_all().await?;
        Ok(aggregate::search_by_name(&snapshot, fragment))
    }

    /// A single employee, or `None` for missing and malformed ids alike.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, UpstreamError> {
        self.client.get_by_id(id).await
    }

    /// The highest salary across all employees; 0 when there are none.
    pub async fn highest_salary(&self) -> Result<u32, UpstreamError> {
        let snapshot = self.client.list_all().await?;
        Ok(aggregate::max_salary(&snapshot))
    }

    /// Names of the ten highest-earning employees.
    pub async fn top_earner_names(&self) -> Result<Vec<String>, UpstreamError> {
        let snapshot = self.client.list_all().await?;
        Ok(aggregate::top_earner_names(&snapshot, TOP_EARNER_COUNT))
    }

    /// Create an employee; the upstream assigns the identifier.
    pub async fn create(&self, input: &EmployeeInput) -> Result<Employee, UpstreamError> {
        self.client.create(input).await
    }

    /// Delete by id: resolve the id to a name, then delete by name.
    pub async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, UpstreamError> {
        let Some(employee) = self.client.get_by_id(id).await? else {
            tracing::debug!(id, "Delete requested for unknown employee");
            return Ok(DeleteOutcome::NotFound);
        };

        let confirmed = self.client.delete_by_name(&employee.name).await?;
        if confirmed {
            tracing::info!(id, name = %employee.name, "Employee deleted");
            Ok(DeleteOutcome::Deleted {
                name: employee.name,
            })
        } else {
            tracing::warn!(id, name = %employee.name, "Upstream did not confirm deletion");
            Ok(DeleteOutcome::NotFound)
        }
    }
}
