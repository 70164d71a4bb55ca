//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Table status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    OutOfService,
}

impl TableStatus {
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
        TableStatus::OutOfService,
    ];

    /// Wire name (used in URL path segments)
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "AVAILABLE",
            TableStatus::Occupied => "OCCUPIED",
            TableStatus::Reserved => "RESERVED",
            TableStatus::OutOfService => "OUT_OF_SERVICE",
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Restaurant table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    pub id: i64,
    pub table_number: i32,
    pub capacity: i32,
    pub status: TableStatus,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTableCreate {
    #[validate(range(min = 1))]
    pub table_number: i32,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub status: TableStatus,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTableUpdate {
    #[validate(range(min = 1))]
    pub table_number: Option<i32>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub status: Option<TableStatus>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Status change payload (`PATCH /tables/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}
