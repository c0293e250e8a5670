//! Core data models for the employee registry.
//!
//! This module contains the employee record types shared by the store,
//! the reporting engine, and the HTTP layer.

mod employee;

pub use employee::{
    EMPLOYEE_FIELDS, EmployeeDraft, EmployeeFields, EmployeeId, EmployeeRecord, max_salary,
};
