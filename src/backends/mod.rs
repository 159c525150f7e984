use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CreateEmployeeRequest, Employee};

pub mod http;

pub use http::HttpEmployeeBackend;

/// Error type for backend calls.
///
/// Carries the observed status code so callers can log what the backend
/// actually said; the facade translates every variant into its own error
/// kinds before anything reaches a client.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("V1 employee API didn't return successful response, status code : {status}")]
    Unavailable { status: u16 },
    /// The backend reported the requested employee as absent.
    #[error("V1 employee API has no such employee, status code : {status}")]
    NotFound { status: u16 },
    /// The call never produced a usable response (connect, timeout, decode).
    #[error("V1 employee API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response arrived without the payload its envelope promised.
    #[error("V1 employee API envelope missing {0}")]
    Envelope(&'static str),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Access to the V1 employee service.
///
/// One implementation speaks HTTP ([`HttpEmployeeBackend`]); tests substitute
/// in-memory stubs. Every call is a single attempt, with no retry or backoff.
#[async_trait]
pub trait EmployeeBackend: Send + Sync {
    /// Fetches the full employee collection.
    async fn list_employees(&self) -> BackendResult<Vec<Employee>>;

    /// Fetches a single employee by id.
    async fn get_employee(&self, id: Uuid) -> BackendResult<Employee>;

    /// Submits a new employee record and returns the created entity.
    async fn create_employee(&self, request: &CreateEmployeeRequest) -> BackendResult<Employee>;

    /// Deletes an employee by name. `Ok(false)` means the backend had no such
    /// record; callers decide whether that matters.
    async fn delete_employee(&self, name: &str) -> BackendResult<bool>;
}
