//! Employee model and related types.
//!
//! This module defines the identifier, the unvalidated input draft, the
//! validated field set, and the stored record for employees.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};

/// Names of the six caller-supplied employee fields, in canonical order.
pub const EMPLOYEE_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "email",
    "salary",
    "department_id",
    "role_id",
];

/// Largest salary a record may hold.
///
/// Keeps report totals far inside the range `Decimal` can represent.
pub fn max_salary() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Opaque unique identifier assigned to a record by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Employee fields as received from a caller, before presence checks.
///
/// Every field is optional here; [`EmployeeDraft::validate`] turns a draft
/// into [`EmployeeFields`] or reports every missing field at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Salary amount.
    pub salary: Option<Decimal>,
    /// Department grouping key.
    pub department_id: Option<String>,
    /// Role key.
    pub role_id: Option<String>,
}

impl EmployeeDraft {
    /// Checks that all six fields are present, then applies the record invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_registry::models::EmployeeDraft;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = EmployeeDraft {
    ///     first_name: Some("Ada".to_string()),
    ///     last_name: Some("Lovelace".to_string()),
    ///     email: Some("ada@example.com".to_string()),
    ///     salary: Some(Decimal::new(100, 0)),
    ///     department_id: None,
    ///     role_id: None,
    /// };
    /// let err = draft.validate().unwrap_err();
    /// assert_eq!(err.to_string(), "Missing required fields: department_id, role_id");
    /// ```
    pub fn validate(self) -> RegistryResult<EmployeeFields> {
        let missing: Vec<String> = [
            self.first_name.is_none(),
            self.last_name.is_none(),
            self.email.is_none(),
            self.salary.is_none(),
            self.department_id.is_none(),
            self.role_id.is_none(),
        ]
        .iter()
        .zip(EMPLOYEE_FIELDS)
        .filter(|(absent, _)| **absent)
        .map(|(_, name)| name.to_string())
        .collect();

        match self {
            EmployeeDraft {
                first_name: Some(first_name),
                last_name: Some(last_name),
                email: Some(email),
                salary: Some(salary),
                department_id: Some(department_id),
                role_id: Some(role_id),
            } => EmployeeFields {
                first_name,
                last_name,
                email,
                salary,
                department_id,
                role_id,
            }
            .normalized(),
            _ => Err(RegistryError::MissingFields { fields: missing }),
        }
    }
}

/// The complete set of mutable employee fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Salary amount, never negative.
    pub salary: Decimal,
    /// Department grouping key.
    pub department_id: String,
    /// Role key.
    pub role_id: String,
}

impl EmployeeFields {
    /// Trims text fields and enforces the record invariants.
    ///
    /// Text fields must be non-empty after trimming and salary must lie
    /// between zero and [`max_salary`]. The first violation found is reported.
    pub fn normalized(self) -> RegistryResult<Self> {
        let fields = Self {
            first_name: non_empty("first_name", self.first_name)?,
            last_name: non_empty("last_name", self.last_name)?,
            email: non_empty("email", self.email)?,
            salary: self.salary,
            department_id: non_empty("department_id", self.department_id)?,
            role_id: non_empty("role_id", self.role_id)?,
        };

        if fields.salary < Decimal::ZERO {
            return Err(RegistryError::invalid("salary", "must not be negative"));
        }
        if fields.salary > max_salary() {
            return Err(RegistryError::invalid(
                "salary",
                format!("must not exceed {}", max_salary()),
            ));
        }

        Ok(fields)
    }
}

fn non_empty(field: &str, value: String) -> RegistryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::invalid(field, "must not be empty"));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// One employee's persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Store-assigned identifier, immutable once assigned.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Salary amount.
    pub salary: Decimal,
    /// Department grouping key.
    pub department_id: String,
    /// Role key.
    pub role_id: String,
}

impl EmployeeRecord {
    /// Builds a record from an id and a validated field set.
    pub fn new(id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            salary: fields.salary,
            department_id: fields.department_id,
            role_id: fields.role_id,
        }
    }

    /// Replaces every mutable field, keeping the id.
    pub fn replace_fields(&mut self, fields: EmployeeFields) {
        *self = Self::new(self.id, fields);
    }

    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            salary: self.salary,
            department_id: self.department_id.clone(),
            role_id: self.role_id.clone(),
        }
    }
}
