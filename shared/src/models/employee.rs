//! Employee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hotel department
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    FrontDesk,
    Housekeeping,
    Kitchen,
    Restaurant,
    Maintenance,
    Management,
    Security,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::FrontDesk,
        Department::Housekeeping,
        Department::Kitchen,
        Department::Restaurant,
        Department::Maintenance,
        Department::Management,
        Department::Security,
    ];

    /// Wire name (used in URL path segments)
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::FrontDesk => "FRONT_DESK",
            Department::Housekeeping => "HOUSEKEEPING",
            Department::Kitchen => "KITCHEN",
            Department::Restaurant => "RESTAURANT",
            Department::Maintenance => "MAINTENANCE",
            Department::Management => "MANAGEMENT",
            Department::Security => "SECURITY",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::OnLeave => "ON_LEAVE",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Department,
    pub position: Option<String>,
    pub status: EmployeeStatus,
    /// Monthly salary in currency unit
    pub salary: f64,
    /// Hire date (YYYY-MM-DD), backend-owned
    pub hire_date: Option<chrono::NaiveDate>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub department: Department,
    pub position: Option<String>,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    pub hire_date: Option<chrono::NaiveDate>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<Department>,
    pub position: Option<String>,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, r#""ON_LEAVE""#);
        let back: EmployeeStatus = serde_json::from_str(r#""ON_LEAVE""#).unwrap();
        assert_eq!(back, EmployeeStatus::OnLeave);
    }

    #[test]
    fn test_create_payload_validation() {
        let payload = EmployeeCreate {
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            email: "nimal@example.com".into(),
            phone: None,
            department: Department::FrontDesk,
            position: Some("Receptionist".into()),
            salary: 52000.0,
            hire_date: None,
        };
        assert!(validator::Validate::validate(&payload).is_ok());

        let negative_salary = EmployeeCreate {
            salary: -1.0,
            ..payload.clone()
        };
        assert!(validator::Validate::validate(&negative_salary).is_err());

        let bad_email = EmployeeCreate {
            email: "not-an-email".into(),
            ..payload
        };
        assert!(validator::Validate::validate(&bad_email).is_err());
    }
}
