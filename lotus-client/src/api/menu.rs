//! Restaurant menu service client (`/api/menu-items`)

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct MenuService {
    http: NetworkHttpClient,
}

impl MenuService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<MenuItem>> {
        self.http.get("api/menu-items").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<MenuItem> {
        self.http.get(&format!("api/menu-items/{id}")).await
    }

    pub async fn create(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        payload.validate()?;
        self.http.post("api/menu-items", payload).await
    }

    pub async fn update(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<MenuItem> {
        payload.validate()?;
        self.http
            .put(&format!("api/menu-items/{id}"), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/menu-items/{id}")).await
    }

    /// Availability flag rides in the query string on this service
    pub async fn set_availability(&self, id: i64, available: bool) -> ClientResult<MenuItem> {
        self.http
            .patch_empty(&format!(
                "api/menu-items/{id}/availability?isAvailable={available}"
            ))
            .await
    }

    pub async fn by_category(&self, category: MenuCategory) -> ClientResult<Vec<MenuItem>> {
        self.http
            .get(&format!("api/menu-items/category/{category}"))
            .await
    }

    pub async fn available(&self) -> ClientResult<Vec<MenuItem>> {
        self.http.get("api/menu-items/available").await
    }

    pub async fn search(&self, name: &str) -> ClientResult<Vec<MenuItem>> {
        self.http
            .get(&format!(
                "api/menu-items/search?name={}",
                urlencoding::encode(name)
            ))
            .await
    }
}
