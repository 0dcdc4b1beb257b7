//! Database Models

pub mod employee;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate, NewEmployee};
