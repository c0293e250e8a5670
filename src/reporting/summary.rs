//! Headline employee statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// Headcount and payroll total over a snapshot of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Number of records in the snapshot.
    pub total_employees: usize,
    /// Sum of all salaries; zero for an empty snapshot. Saturates at
    /// `Decimal::MAX` rather than overflowing.
    pub total_salary: Decimal,
}

/// Computes the summary report for a snapshot of records.
///
/// # Examples
///
/// ```
/// use employee_registry::reporting::summary_report;
/// use rust_decimal::Decimal;
///
/// let report = summary_report(&[]);
/// assert_eq!(report.total_employees, 0);
/// assert_eq!(report.total_salary, Decimal::ZERO);
/// ```
pub fn summary_report(records: &[EmployeeRecord]) -> SummaryReport {
    SummaryReport {
        total_employees: records.len(),
        total_salary: records
            .iter()
            .fold(Decimal::ZERO, |total, r| total.saturating_add(r.salary)),
    }
}
