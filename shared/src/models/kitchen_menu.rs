//! Kitchen Menu Model
//!
//! The kitchen service carries its own menu variant: scheduled per date,
//! split by meal and service type.

use super::menu_item::MenuCategory;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Meal slot the item is served in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Buffet,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Buffet => "BUFFET",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which surface the item is offered on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenServiceType {
    #[default]
    Restaurant,
    Event,
}

impl KitchenServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KitchenServiceType::Restaurant => "RESTAURANT",
            KitchenServiceType::Event => "EVENT",
        }
    }
}

impl std::fmt::Display for KitchenServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kitchen menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenMenuItem {
    pub id: i64,
    pub item_name: String,
    pub category: MenuCategory,
    /// Price in currency unit
    pub price: f64,
    pub available: bool,
    pub meal_type: MealType,
    pub service_type: KitchenServiceType,
    pub menu_date: Option<chrono::NaiveDate>,
    pub restaurant_id: Option<i64>,
    pub description: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create kitchen menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KitchenMenuItemCreate {
    #[validate(length(min = 1))]
    pub item_name: String,
    pub category: MenuCategory,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub meal_type: MealType,
    pub service_type: KitchenServiceType,
    pub menu_date: Option<chrono::NaiveDate>,
    pub restaurant_id: Option<i64>,
    pub description: Option<String>,
}

/// Update kitchen menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct KitchenMenuItemUpdate {
    pub item_name: Option<String>,
    pub category: Option<MenuCategory>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub meal_type: Option<MealType>,
    pub service_type: Option<KitchenServiceType>,
    pub menu_date: Option<chrono::NaiveDate>,
    pub description: Option<String>,
}
