//! Event and Venue Models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    Booked,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Booked => "BOOKED",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Venue entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    /// Rental price per hour in currency unit
    pub price_per_hour: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create venue payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,
}

/// Update venue payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct VenueUpdate {
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub price_per_hour: Option<f64>,
}

/// Event booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub venue_id: i64,
    pub customer_name: String,
    pub event_date: chrono::NaiveDate,
    pub attendees: i32,
    pub status: EventStatus,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Book event payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventBook {
    pub venue_id: i64,
    #[validate(length(min = 1))]
    pub customer_name: String,
    pub event_date: chrono::NaiveDate,
    #[validate(range(min = 1))]
    pub attendees: i32,
}

/// Update event payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    pub venue_id: Option<i64>,
    pub customer_name: Option<String>,
    pub event_date: Option<chrono::NaiveDate>,
    #[validate(range(min = 1))]
    pub attendees: Option<i32>,
    pub status: Option<EventStatus>,
}
