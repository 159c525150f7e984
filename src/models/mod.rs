
pub mod employee;
pub mod envelope;

pub use employee::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee, ValidationError};
pub use envelope::BackendEnvelope;
