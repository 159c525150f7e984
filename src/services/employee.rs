use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::backends::EmployeeBackend;
use crate::models::{CreateEmployeeRequest, Employee};

/// Error type for facade operations, carrying the message surfaced to the
/// caller. Backend failures never cross this boundary untyped: every
/// operation catches them and re-raises one of these with a fixed message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacadeError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidRequest(String),
}

pub type FacadeResult<T> = Result<T, FacadeError>;

const EMPLOYEES_NOT_FOUND: &str = "Employees not found";

/// Client-facing operations over the V1 employee backend.
///
/// The facade holds no cache: the backend collection is the single source of
/// truth, re-fetched on every aggregate or search call. All computation on
/// top of a fetch is pure and synchronous.
pub struct EmployeeFacade {
    backend: Arc<dyn EmployeeBackend>,
}

impl EmployeeFacade {
    pub fn new(backend: Arc<dyn EmployeeBackend>) -> Self {
        Self { backend }
    }

    /// Returns the full employee collection unmodified.
    pub async fn list_all(&self) -> FacadeResult<Vec<Employee>> {
        self.backend.list_employees().await.map_err(|err| {
            tracing::error!("Fetching employee list failed: {}", err);
            FacadeError::NotFound(EMPLOYEES_NOT_FOUND.to_string())
        })
    }

    /// Returns employees whose name contains `search_string`, case-sensitive,
    /// in backend order. An empty result is a valid response, not an error.
    pub async fn search_by_name(&self, search_string: &str) -> FacadeResult<Vec<Employee>> {
        let employees = self.backend.list_employees().await.map_err(|err| {
            tracing::error!(
                "Fetching employees with search_string {} failed: {}",
                search_string,
                err
            );
            FacadeError::NotFound("Any employee does not match the provided criteria".to_string())
        })?;

        Ok(employees
            .into_iter()
            .filter(|employee| employee.name.contains(search_string))
            .collect())
    }

    /// Looks up a single employee. The id must parse as a UUID; anything else
    /// is reported the same way as an absent employee.
    pub async fn get_by_id(&self, id: &str) -> FacadeResult<Employee> {
        let uuid = Uuid::parse_str(id).map_err(|err| {
            tracing::error!("Rejecting malformed employee id {}: {}", id, err);
            FacadeError::NotFound(format!("Employee not found for id {id}"))
        })?;

        self.backend.get_employee(uuid).await.map_err(|err| {
            tracing::error!("Fetching employee with id {} failed: {}", id, err);
            FacadeError::NotFound(format!("Employee not found for id {id}"))
        })
    }

    /// Maximum salary over the full collection. An empty collection has no
    /// maximum and is reported as not found.
    pub async fn highest_salary(&self) -> FacadeResult<i64> {
        let employees = self.backend.list_employees().await.map_err(|err| {
            tracing::error!("Fetching employee with highest salary failed: {}", err);
            FacadeError::NotFound(EMPLOYEES_NOT_FOUND.to_string())
        })?;

        employees
            .iter()
            .map(|employee| employee.salary)
            .max()
            .ok_or_else(|| {
                tracing::error!("Employee list is empty, no highest salary");
                FacadeError::NotFound(EMPLOYEES_NOT_FOUND.to_string())
            })
    }

    /// Names of the ten highest earners, highest salary first. The sort is
    /// stable, so equal salaries keep their backend order; shorter lists are
    /// returned whole.
    pub async fn top_ten_earner_names(&self) -> FacadeResult<Vec<String>> {
        let mut employees = self.backend.list_employees().await.map_err(|err| {
            tracing::error!("Fetching top ten highest salaries failed: {}", err);
            FacadeError::NotFound(EMPLOYEES_NOT_FOUND.to_string())
        })?;

        employees.sort_by(|a, b| b.salary.cmp(&a.salary));
        employees.truncate(10);
        Ok(employees.into_iter().map(|employee| employee.name).collect())
    }

    /// Validates and forwards a create request, returning the created record.
    pub async fn create(&self, request: CreateEmployeeRequest) -> FacadeResult<Employee> {
        request
            .validate()
            .map_err(|err| FacadeError::InvalidRequest(err.to_string()))?;

        self.backend.create_employee(&request).await.map_err(|err| {
            tracing::error!("Creating employee with name {} failed: {}", request.name, err);
            FacadeError::InvalidRequest("Request was unsuccessful, please try again".to_string())
        })
    }

    /// Deletes by id: resolves the id to a name via lookup, then deletes by
    /// name and returns the name. If the lookup fails no delete call is made.
    /// A `false` deletion flag means the record was already gone; that is
    /// logged and still counts as success.
    pub async fn delete_by_id(&self, id: &str) -> FacadeResult<String> {
        let not_found =
            || FacadeError::NotFound(format!("Employee not found for id {id}, it might be already deleted"));

        let uuid = Uuid::parse_str(id).map_err(|err| {
            tracing::error!("Rejecting malformed employee id {}: {}", id, err);
            not_found()
        })?;

        let employee = self.backend.get_employee(uuid).await.map_err(|err| {
            tracing::error!("Fetching employee with id {} for deletion failed: {}", id, err);
            not_found()
        })?;

        let deleted = self
            .backend
            .delete_employee(&employee.name)
            .await
            .map_err(|err| {
                tracing::error!("Deleting employee with id {} failed: {}", id, err);
                not_found()
            })?;

        if !deleted {
            tracing::error!(
                "Employee with name {} might be already deleted.",
                employee.name
            );
        }

        Ok(employee.name)
    }
}
