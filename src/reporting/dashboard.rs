//! Dashboard statistics with per-department breakdowns.
//!
//! The dashboard report extends the summary with an overall average salary,
//! one statistics entry per department, and the two department leaderboard
//! picks.
//!
//! # Ordering
//!
//! Departments are grouped in ascending key order, so `department_stats` is
//! sorted by `department`. When two departments tie for a leaderboard pick,
//! the one with the lexicographically smallest key wins. The report is
//! therefore identical for any ordering of the same records.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

use super::summary::summary_report;

/// Returns the value reported as `salary_growth_rate`, which is 5.5.
///
/// This is a fixed placeholder, not computed from data: the registry keeps no
/// salary history to derive a growth rate from.
pub fn placeholder_salary_growth_rate() -> Decimal {
    Decimal::new(55, 1)
}

/// Decimal places used for reported averages.
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// Aggregates for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// The department grouping key.
    pub department: String,
    /// Sum of salaries in the department.
    pub total_salary: Decimal,
    /// Mean salary in the department, rounded to two places.
    pub avg_salary: Decimal,
    /// Number of employees in the department.
    pub employee_count: usize,
}

/// Full dashboard statistics over a snapshot of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Number of records in the snapshot.
    pub total_employees: usize,
    /// Sum of all salaries.
    pub total_salary: Decimal,
    /// Mean salary rounded to two places; zero for an empty snapshot.
    pub avg_salary: Decimal,
    /// One entry per distinct department, sorted by department key.
    pub department_stats: Vec<DepartmentStats>,
    /// Department with the largest salary total, if any department exists.
    pub highest_paid_department: Option<String>,
    /// Department with the most employees, if any department exists.
    pub department_with_most_employees: Option<String>,
    /// Fixed placeholder, see [`placeholder_salary_growth_rate`].
    pub salary_growth_rate: Decimal,
}

#[derive(Default)]
struct DepartmentTotals {
    total_salary: Decimal,
    employee_count: usize,
}

/// Computes the dashboard report for a snapshot of records.
///
/// An empty snapshot yields zero totals and average, no department entries,
/// and no leaderboard picks. Salary sums saturate at `Decimal::MAX` instead
/// of overflowing.
///
/// # Examples
///
/// ```
/// use employee_registry::models::{EmployeeFields, EmployeeId, EmployeeRecord};
/// use employee_registry::reporting::dashboard_report;
/// use rust_decimal::Decimal;
///
/// let record = |department: &str, salary: i64| {
///     EmployeeRecord::new(
///         EmployeeId::new(),
///         EmployeeFields {
///             first_name: "Test".to_string(),
///             last_name: "User".to_string(),
///             email: "test@example.com".to_string(),
///             salary: Decimal::new(salary, 0),
///             department_id: department.to_string(),
///             role_id: "staff".to_string(),
///         },
///     )
/// };
///
/// let report = dashboard_report(&[record("A", 100), record("A", 200), record("B", 50)]);
/// assert_eq!(report.avg_salary, Decimal::new(11667, 2));
/// assert_eq!(report.highest_paid_department.as_deref(), Some("A"));
/// ```
pub fn dashboard_report(records: &[EmployeeRecord]) -> DashboardReport {
    let summary = summary_report(records);

    let mut departments: BTreeMap<&str, DepartmentTotals> = BTreeMap::new();
    for record in records {
        let totals = departments.entry(record.department_id.as_str()).or_default();
        totals.total_salary = totals.total_salary.saturating_add(record.salary);
        totals.employee_count += 1;
    }

    let department_stats: Vec<DepartmentStats> = departments
        .into_iter()
        .map(|(department, totals)| DepartmentStats {
            department: department.to_string(),
            total_salary: totals.total_salary,
            avg_salary: average(totals.total_salary, totals.employee_count),
            employee_count: totals.employee_count,
        })
        .collect();

    let highest_paid_department = first_max_by_key(&department_stats, |s| s.total_salary);
    let department_with_most_employees = first_max_by_key(&department_stats, |s| s.employee_count);

    DashboardReport {
        total_employees: summary.total_employees,
        total_salary: summary.total_salary,
        avg_salary: average(summary.total_salary, summary.total_employees),
        department_stats,
        highest_paid_department,
        department_with_most_employees,
        salary_growth_rate: placeholder_salary_growth_rate(),
    }
}

/// Mean of `total` over `count`, rounded half away from zero; zero when empty.
fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count))
        .round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Department of the first entry holding the maximum key.
fn first_max_by_key<K: Ord>(
    stats: &[DepartmentStats],
    key: impl Fn(&DepartmentStats) -> K,
) -> Option<String> {
    let mut leader: Option<(&DepartmentStats, K)> = None;
    for entry in stats {
        let k = key(entry);
        let replace = match &leader {
            Some((_, best)) => k > *best,
            None => true,
        };
        if replace {
            leader = Some((entry, k));
        }
    }
    leader.map(|(entry, _)| entry.department.clone())
}
