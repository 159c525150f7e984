use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// An employee record as returned by the V1 backend service.
///
/// The backend owns these records; the facade only reads, filters and sorts
/// copies. Wire field names carry the backend's `employee_` prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age")]
    pub age: u32,
    #[serde(rename = "employee_title")]
    pub title: String,
    /// Generated by the backend; not present on every response.
    #[serde(
        rename = "employee_email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// Validation failures raised before a create request reaches the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be blank")]
    BlankName,
    #[error("title must not be blank")]
    BlankTitle,
    #[error("salary must be a positive integer")]
    NonPositiveSalary,
    #[error("age must be a positive integer")]
    NonPositiveAge,
}

/// Body of a facade create call, forwarded verbatim to the backend once
/// validated. The backend's create input uses bare field names, without the
/// `employee_` prefix its records carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: i64,
    pub age: u32,
    pub title: String,
}

impl CreateEmployeeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        if self.salary <= 0 {
            return Err(ValidationError::NonPositiveSalary);
        }
        if self.age == 0 {
            return Err(ValidationError::NonPositiveAge);
        }
        Ok(())
    }
}

/// Body of a backend delete call. The backend's delete operation is keyed by
/// name, not id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}
