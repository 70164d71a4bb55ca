//! Restaurant table service client (`/api/tables`)

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{
    RestaurantTable, RestaurantTableCreate, RestaurantTableUpdate, TableStatus,
    TableStatusUpdate,
};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct TableService {
    http: NetworkHttpClient,
}

impl TableService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<RestaurantTable>> {
        self.http.get("api/tables").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<RestaurantTable> {
        self.http.get(&format!("api/tables/{id}")).await
    }

    pub async fn create(&self, payload: &RestaurantTableCreate) -> ClientResult<RestaurantTable> {
        payload.validate()?;
        self.http.post("api/tables", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &RestaurantTableUpdate,
    ) -> ClientResult<RestaurantTable> {
        payload.validate()?;
        self.http.put(&format!("api/tables/{id}"), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/tables/{id}")).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: TableStatus,
    ) -> ClientResult<RestaurantTable> {
        self.http
            .patch(
                &format!("api/tables/{id}/status"),
                &TableStatusUpdate { status },
            )
            .await
    }

    pub async fn by_status(&self, status: TableStatus) -> ClientResult<Vec<RestaurantTable>> {
        self.http.get(&format!("api/tables/status/{status}")).await
    }
}
