//! Response types for the employee registry API.
//!
//! This module defines the success bodies, the read projections of an
//! employee record, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::models::EmployeeRecord;

/// Body returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by `POST /employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The id assigned to the new record.
    pub id: String,
}

/// Employee as listed by `GET /employees`.
///
/// Department and role keys are exposed under the `department` and `role`
/// names on this projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListItem {
    /// Record id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Salary amount.
    pub salary: Decimal,
    /// Department key.
    pub department: String,
    /// Role key.
    pub role: String,
}

impl From<EmployeeRecord> for EmployeeListItem {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            salary: record.salary,
            department: record.department_id,
            role: record.role_id,
        }
    }
}

/// Employee as returned by the external `GET /api/employee/:id` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    /// Record id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Salary amount.
    pub salary: Decimal,
}

impl From<EmployeeRecord> for EmployeeDetail {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            salary: record.salary,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            "Employee not found",
            format!("No employee exists with id '{}'", id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RegistryError> for ApiErrorResponse {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::MissingFields { fields } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    "Missing required fields",
                    fields.join(", "),
                ),
            },
            RegistryError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid employee field '{}'", field),
                    message,
                ),
            },
            RegistryError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&id),
            },
            RegistryError::DuplicateEmail { email } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_EMAIL",
                    "Email already in use",
                    format!("Another employee already uses '{}'", email),
                ),
            },
            RegistryError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RegistryError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RegistryError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            },
        }
    }
}
