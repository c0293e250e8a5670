//! Error types for the employee registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while storing employee records
//! or loading configuration.

use thiserror::Error;

/// The main error type for the employee registry.
///
/// Store, reporting, and configuration operations all return this error
/// type. The HTTP layer translates it into status codes, keeping "bad input"
/// distinct from "target not found".
///
/// # Example
///
/// ```
/// use employee_registry::error::RegistryError;
///
/// let error = RegistryError::EmployeeNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: missing");
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// One or more required employee fields were absent or null.
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields {
        /// The names of the missing fields, in canonical field order.
        fields: Vec<String>,
    },

    /// An employee field was present but violated a record invariant.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee record exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Another record already uses this email address.
    #[error("Email already in use: {email}")]
    DuplicateEmail {
        /// The conflicting email address.
        email: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage backend could not complete an operation.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

impl RegistryError {
    /// Returns true for errors caused by missing or invalid input fields.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::MissingFields { .. } | RegistryError::InvalidEmployee { .. }
        )
    }

    /// Returns true when the operation targeted a record that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::EmployeeNotFound { .. })
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        RegistryError::InvalidEmployee {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn storage(message: impl Into<String>) -> Self {
        RegistryError::StorageError {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_lists_every_field() {
        let error = RegistryError::MissingFields {
            fields: vec!["email".to_string(), "salary".to_string()],
        };
        assert_eq!(error.to_string(), "Missing required fields: email, salary");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = RegistryError::invalid("salary", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'salary': must not be negative"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RegistryError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_duplicate_email_displays_email() {
        let error = RegistryError::DuplicateEmail {
            email: "ada@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "Email already in use: ada@example.com");
    }

    #[test]
    fn test_validation_classification() {
        assert!(RegistryError::invalid("email", "must not be empty").is_validation());
        assert!(
            RegistryError::MissingFields {
                fields: vec!["role_id".to_string()]
            }
            .is_validation()
        );
        assert!(
            !RegistryError::EmployeeNotFound {
                id: "x".to_string()
            }
            .is_validation()
        );
        assert!(!RegistryError::storage("disk full").is_not_found());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RegistryError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RegistryResult<()> {
            Err(RegistryError::EmployeeNotFound {
                id: "emp".to_string(),
            })
        }

        fn propagates_error() -> RegistryResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().unwrap_err().is_not_found());
    }
}
