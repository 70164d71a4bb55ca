//! Statistics Models
//!
//! Aggregate summary records. The employee service precomputes its
//! statistics server-side; the kitchen and restaurant figures are also
//! recomputed locally from the loaded collections (see the client's view
//! controllers), so these shapes double as the local aggregation output.

use serde::{Deserialize, Serialize};

/// Overall employee statistics (`GET /employees/statistics`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatistics {
    pub total_employees: i64,
    pub active_employees: i64,
    pub inactive_employees: i64,
    pub on_leave_employees: i64,
    /// Absent when there are no employees; never a silent zero
    pub average_salary: Option<f64>,
    pub total_salary_expense: f64,
}

/// Per-department breakdown (`GET /employees/statistics/departments`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStatistics {
    pub department: String,
    pub employee_count: i64,
    pub average_salary: Option<f64>,
}

/// Restaurant overview figures
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantStatistics {
    pub total_menu_items: i64,
    pub available_menu_items: i64,
    pub total_tables: i64,
    pub available_tables: i64,
    pub occupied_tables: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    /// Orders neither served nor cancelled
    pub active_orders: i64,
    /// Revenue over served orders, in currency unit
    pub total_revenue: f64,
}

/// Kitchen dashboard counts (`GET /orders/dashboard/counts`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KitchenDashboardCounts {
    pub pending: i64,
    pub cooking: i64,
    pub ready: i64,
    pub served: i64,
}

impl KitchenDashboardCounts {
    pub fn total(&self) -> i64 {
        self.pending + self.cooking + self.ready + self.served
    }
}
