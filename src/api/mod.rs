//! HTTP API module for the employee registry.
//!
//! This module provides the REST endpoints that expose the employee store
//! and the salary reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{cors_layer, create_app, create_router};
pub use request::EmployeeRequest;
pub use response::{
    ApiError, ApiErrorResponse, CreatedResponse, EmployeeDetail, EmployeeListItem,
    MessageResponse,
};
pub use state::AppState;
