//! Request types for the employee registry API.
//!
//! This module defines the JSON body accepted by the create and update
//! endpoints. Every field is optional at the JSON level so that missing
//! fields can be reported by name rather than as a parse failure.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::EmployeeDraft;

/// Request body for `POST /employee` and `PUT /employee/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Salary as a JSON number or numeric string.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Department key as a string or integer.
    #[serde(default, deserialize_with = "deserialize_key")]
    pub department_id: Option<String>,
    /// Role key as a string or integer.
    #[serde(default, deserialize_with = "deserialize_key")]
    pub role_id: Option<String>,
}

/// Department and role keys arrive from some clients as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyInput {
    Text(String),
    Integer(i64),
}

fn deserialize_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<KeyInput>::deserialize(deserializer)?.map(|key| match key {
            KeyInput::Text(text) => text,
            KeyInput::Integer(n) => n.to_string(),
        }),
    )
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            salary: req.salary,
            department_id: req.department_id,
            role_id: req.role_id,
        }
    }
}
