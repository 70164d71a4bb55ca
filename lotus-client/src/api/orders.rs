//! Restaurant order service client (`/api/orders`)

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate, RestaurantStatistics};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct OrderService {
    http: NetworkHttpClient,
}

impl OrderService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Order>> {
        self.http.get("api/orders").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("api/orders/{id}")).await
    }

    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Order> {
        payload.validate()?;
        self.http.post("api/orders", payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/orders/{id}")).await
    }

    /// Raw status change; the transition rules live in the view layer
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> ClientResult<Order> {
        self.http
            .patch(
                &format!("api/orders/{id}/status"),
                &OrderStatusUpdate { status },
            )
            .await
    }

    pub async fn by_status(&self, status: OrderStatus) -> ClientResult<Vec<Order>> {
        self.http.get(&format!("api/orders/status/{status}")).await
    }

    /// Server-side aggregate; the overview recomputes these figures
    /// locally and treats this endpoint as a cross-check
    pub async fn statistics(&self) -> ClientResult<RestaurantStatistics> {
        self.http.get("api/orders/statistics").await
    }
}
