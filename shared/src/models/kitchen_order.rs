//! Kitchen Order Model
//!
//! Kitchen tickets run a shorter lifecycle than restaurant orders:
//! PENDING -> COOKING -> READY -> SERVED, no cancellation path. SERVED is
//! the only terminal state.

use crate::error::TransitionError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kitchen order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenOrderStatus {
    #[default]
    Pending,
    Cooking,
    Ready,
    Served,
}

impl KitchenOrderStatus {
    pub const ALL: [KitchenOrderStatus; 4] = [
        KitchenOrderStatus::Pending,
        KitchenOrderStatus::Cooking,
        KitchenOrderStatus::Ready,
        KitchenOrderStatus::Served,
    ];

    /// Wire name (used in URL path segments)
    pub fn as_str(&self) -> &'static str {
        match self {
            KitchenOrderStatus::Pending => "PENDING",
            KitchenOrderStatus::Cooking => "COOKING",
            KitchenOrderStatus::Ready => "READY",
            KitchenOrderStatus::Served => "SERVED",
        }
    }

    /// Single successor in the forward progression, `None` when terminal
    pub fn next(&self) -> Option<KitchenOrderStatus> {
        match self {
            KitchenOrderStatus::Pending => Some(KitchenOrderStatus::Cooking),
            KitchenOrderStatus::Cooking => Some(KitchenOrderStatus::Ready),
            KitchenOrderStatus::Ready => Some(KitchenOrderStatus::Served),
            KitchenOrderStatus::Served => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, KitchenOrderStatus::Served)
    }

    /// Only the single forward step is legal for kitchen tickets
    pub fn can_transition_to(&self, target: KitchenOrderStatus) -> bool {
        self.next() == Some(target)
    }

    /// Validate a requested transition against the table
    pub fn check_transition(&self, target: KitchenOrderStatus) -> Result<(), TransitionError> {
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

impl std::fmt::Display for KitchenOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kitchen order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderItem {
    pub id: Option<i64>,
    pub menu_item_id: i64,
    /// Populated from the menu item on the server side
    pub item_name: Option<String>,
    pub quantity: i32,
    /// Populated from the menu item on the server side
    pub price: Option<f64>,
    pub notes: Option<String>,
}

impl KitchenOrderItem {
    /// quantity x unit price; an unpriced line contributes nothing
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price.unwrap_or(0.0)
    }
}

/// Kitchen order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrder {
    pub id: i64,
    pub restaurant_id: Option<i64>,
    pub table_number: Option<String>,
    pub staff_id: Option<i64>,
    #[serde(rename = "orderStatus")]
    pub status: KitchenOrderStatus,
    pub special_instructions: Option<String>,
    /// Backend-reported total in currency unit
    pub total_amount: f64,
    #[serde(default)]
    pub order_items: Vec<KitchenOrderItem>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl KitchenOrder {
    /// Total recomputed from the line items; see `Order::computed_total`
    pub fn computed_total(&self) -> f64 {
        self.order_items
            .iter()
            .map(KitchenOrderItem::line_total)
            .sum()
    }

    pub fn total_is_consistent(&self) -> bool {
        (self.total_amount - self.computed_total()).abs() < 0.005
    }
}

/// Create kitchen order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderCreate {
    pub restaurant_id: Option<i64>,
    pub table_number: Option<String>,
    pub staff_id: Option<i64>,
    pub special_instructions: Option<String>,
    #[validate(nested)]
    pub order_items: Vec<KitchenOrderItemCreate>,
}

/// Kitchen order line item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KitchenOrderItemCreate {
    pub menu_item_id: i64,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Status change payload (`PATCH /orders/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenOrderStatusUpdate {
    pub status: KitchenOrderStatus,
}
