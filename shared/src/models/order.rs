//! Order Model (restaurant)
//!
//! Restaurant orders carry the full lifecycle:
//! PENDING -> CONFIRMED -> PREPARING -> READY -> SERVED, with CANCELLED
//! reachable from any non-terminal state. SERVED and CANCELLED are
//! terminal. The transition table is explicit; an unknown or terminal
//! state never silently passes as "no successor".

use crate::error::TransitionError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Cancelled,
    ];

    /// Wire name (used in URL path segments)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Single successor in the forward progression, `None` when terminal
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Served),
            OrderStatus::Served => None,
            OrderStatus::Cancelled => None,
        }
    }

    /// No transition leaves a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Served | OrderStatus::Cancelled)
    }

    /// Forward step, or cancellation from any non-terminal state
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if target == OrderStatus::Cancelled {
            return true;
        }
        self.next() == Some(target)
    }

    /// Validate a requested transition against the table
    pub fn check_transition(&self, target: OrderStatus) -> Result<(), TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::terminal(self.as_str()));
        }
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(TransitionError::invalid(self.as_str(), target.as_str()))
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub menu_item_id: i64,
    pub menu_item_name: String,
    pub quantity: i32,
    /// Price per unit in currency unit
    pub unit_price: f64,
    /// Backend-reported line total; recomputed locally, never trusted
    pub subtotal: Option<f64>,
    pub special_requests: Option<String>,
}

impl OrderItem {
    /// quantity x unit price
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub table_id: Option<i64>,
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    /// Backend-reported total in currency unit
    pub total_amount: f64,
    pub special_instructions: Option<String>,
    pub number_of_guests: Option<i32>,
    pub order_time: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Total recomputed from the line items.
    ///
    /// Invariant: `total_amount == computed_total()` at all times; callers
    /// recompute after any item change instead of trusting the cached
    /// field.
    pub fn computed_total(&self) -> f64 {
        self.order_items.iter().map(OrderItem::line_total).sum()
    }

    /// Whether the backend-reported total matches the line items
    pub fn total_is_consistent(&self) -> bool {
        (self.total_amount - self.computed_total()).abs() < 0.005
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_id: Option<i64>,
    pub customer_name: Option<String>,
    pub special_instructions: Option<String>,
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
    #[validate(nested)]
    pub order_items: Vec<OrderItemCreate>,
}

/// Order line item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub menu_item_id: i64,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub special_requests: Option<String>,
}

/// Status change payload (`PATCH /orders/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
