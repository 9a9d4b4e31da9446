//! Wire types shared with the upstream employee-record service.
//!
//! # Data Flow
//! ```text
//! Upstream JSON (employee_* keys)
//!     → Envelope<T> (data / status / errorMessage wrapper)
//!     → Employee / Vec<Employee> / bool payloads
//!
//! Caller JSON (plain keys)
//!     → EmployeeInput (POST body)
//!     → DeleteEmployeeInput (DELETE body, upstream deletes by name)
//! ```
//!
//! # Design Decisions
//! - Employees are immutable snapshots; nothing mutates them locally
//! - The envelope exists only per-call and is never persisted
//! - Identifiers stay opaque strings; UUID syntax is checked at the
//!   client boundary, not encoded in the type

use serde::{Deserialize, Serialize};

/// An employee record as returned by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier (UUID-shaped, treated as opaque).
    pub id: String,

    #[serde(rename = "employee_name")]
    pub name: String,

    #[serde(rename = "employee_salary")]
    pub salary: u32,

    #[serde(rename = "employee_age")]
    pub age: u32,

    #[serde(rename = "employee_title")]
    pub title: String,

    #[serde(rename = "employee_email")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Caller-supplied fields for creating an employee.
///
/// Validation is the upstream's job; this type only carries the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
}

/// Body for the upstream DELETE endpoint, which removes records by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

/// The uniform response wrapper the upstream puts around every payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    // An explicit default fn keeps serde's derive from inferring a
    // `T: Default` bound; payload types like Employee have no Default.
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "errorMessage")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, or surface the upstream's error message.
    pub fn into_data(self) -> Result<T, Option<String>> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self.error_message),
        }
    }
}
