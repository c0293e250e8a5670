//! Reporting over employee record snapshots.
//!
//! Reports hold no state of their own. Each call recomputes from the
//! snapshot it is given, typically the result of
//! [`EmployeeStore::list_all`](crate::store::EmployeeStore::list_all).

mod dashboard;
mod summary;

pub use dashboard::{
    AVERAGE_DECIMAL_PLACES, DashboardReport, DepartmentStats, dashboard_report,
    placeholder_salary_growth_rate,
};
pub use summary::{SummaryReport, summary_report};
