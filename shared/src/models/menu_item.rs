//! Menu Item Model (restaurant)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
    SideDish,
    Special,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::Appetizer,
        MenuCategory::MainCourse,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
        MenuCategory::SideDish,
        MenuCategory::Special,
    ];

    /// Wire name (used in URL path segments)
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "APPETIZER",
            MenuCategory::MainCourse => "MAIN_COURSE",
            MenuCategory::Dessert => "DESSERT",
            MenuCategory::Beverage => "BEVERAGE",
            MenuCategory::SideDish => "SIDE_DISH",
            MenuCategory::Special => "SPECIAL",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: MenuCategory,
    /// Price in currency unit
    pub price: f64,
    #[serde(rename = "isAvailable")]
    pub available: bool,
    pub description: Option<String>,
    pub preparation_time_minutes: Option<i32>,
    pub image_url: Option<String>,
    pub ingredients: Option<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: MenuCategory,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub preparation_time_minutes: Option<i32>,
    pub image_url: Option<String>,
    pub ingredients: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(rename = "isAvailable")]
    pub available: Option<bool>,
    pub description: Option<String>,
    pub preparation_time_minutes: Option<i32>,
    pub image_url: Option<String>,
    pub ingredients: Option<String>,
}
