
pub mod employee;

pub use employee::{EmployeeFacade, FacadeError, FacadeResult};
