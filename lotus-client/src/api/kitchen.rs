//! Kitchen service client (`/api/kitchen`)
//!
//! The kitchen backend carries both its order queue and its own menu
//! variant under one root.

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{
    KitchenDashboardCounts, KitchenMenuItem, KitchenMenuItemCreate, KitchenMenuItemUpdate,
    KitchenOrder, KitchenOrderCreate, KitchenOrderStatus, KitchenOrderStatusUpdate, MealType,
    MenuCategory,
};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct KitchenService {
    http: NetworkHttpClient,
}

impl KitchenService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    // ========== Orders ==========

    pub async fn orders(&self) -> ClientResult<Vec<KitchenOrder>> {
        self.http.get("api/kitchen/orders").await
    }

    pub async fn order(&self, id: i64) -> ClientResult<KitchenOrder> {
        self.http.get(&format!("api/kitchen/orders/{id}")).await
    }

    pub async fn create_order(&self, payload: &KitchenOrderCreate) -> ClientResult<KitchenOrder> {
        payload.validate()?;
        self.http.post("api/kitchen/orders", payload).await
    }

    pub async fn delete_order(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/kitchen/orders/{id}")).await
    }

    /// Raw status change; the transition rules live in the view layer
    pub async fn update_order_status(
        &self,
        id: i64,
        status: KitchenOrderStatus,
    ) -> ClientResult<KitchenOrder> {
        self.http
            .patch(
                &format!("api/kitchen/orders/{id}/status"),
                &KitchenOrderStatusUpdate { status },
            )
            .await
    }

    pub async fn orders_by_status(
        &self,
        status: KitchenOrderStatus,
    ) -> ClientResult<Vec<KitchenOrder>> {
        self.http
            .get(&format!("api/kitchen/orders/status/{status}"))
            .await
    }

    pub async fn orders_by_staff(&self, staff_id: i64) -> ClientResult<Vec<KitchenOrder>> {
        self.http
            .get(&format!("api/kitchen/orders/staff/{staff_id}"))
            .await
    }

    pub async fn orders_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> ClientResult<Vec<KitchenOrder>> {
        self.http
            .get(&format!("api/kitchen/orders/restaurant/{restaurant_id}"))
            .await
    }

    pub async fn dashboard_counts(&self) -> ClientResult<KitchenDashboardCounts> {
        self.http.get("api/kitchen/orders/dashboard/counts").await
    }

    // ========== Menu ==========

    pub async fn menu(&self) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http.get("api/kitchen/menu").await
    }

    pub async fn menu_item(&self, id: i64) -> ClientResult<KitchenMenuItem> {
        self.http.get(&format!("api/kitchen/menu/{id}")).await
    }

    pub async fn create_menu_item(
        &self,
        payload: &KitchenMenuItemCreate,
    ) -> ClientResult<KitchenMenuItem> {
        payload.validate()?;
        self.http.post("api/kitchen/menu", payload).await
    }

    pub async fn update_menu_item(
        &self,
        id: i64,
        payload: &KitchenMenuItemUpdate,
    ) -> ClientResult<KitchenMenuItem> {
        payload.validate()?;
        self.http
            .put(&format!("api/kitchen/menu/{id}"), payload)
            .await
    }

    pub async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/kitchen/menu/{id}")).await
    }

    pub async fn toggle_availability(&self, id: i64) -> ClientResult<KitchenMenuItem> {
        self.http
            .patch_empty(&format!("api/kitchen/menu/{id}/toggle-availability"))
            .await
    }

    pub async fn available_menu(&self) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http.get("api/kitchen/menu/available").await
    }

    pub async fn menu_by_meal_type(&self, meal_type: MealType) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http
            .get(&format!("api/kitchen/menu/meal-type/{meal_type}"))
            .await
    }

    pub async fn menu_by_category(
        &self,
        category: MenuCategory,
    ) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http
            .get(&format!("api/kitchen/menu/category/{category}"))
            .await
    }

    pub async fn menu_by_date(&self, date: chrono::NaiveDate) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http.get(&format!("api/kitchen/menu/date/{date}")).await
    }

    pub async fn search_menu(&self, name: &str) -> ClientResult<Vec<KitchenMenuItem>> {
        self.http
            .get(&format!(
                "api/kitchen/menu/search?name={}",
                urlencoding::encode(name)
            ))
            .await
    }
}
