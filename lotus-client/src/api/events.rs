//! Event service client (`/api/events`)
//!
//! Venues and event bookings live under the same root.

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use shared::models::{Event, EventBook, EventUpdate, Venue, VenueCreate, VenueUpdate};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct EventService {
    http: NetworkHttpClient,
}

impl EventService {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn with_http(http: NetworkHttpClient) -> Self {
        Self { http }
    }

    // ========== Venues ==========

    pub async fn venues(&self) -> ClientResult<Vec<Venue>> {
        self.http.get("api/events/venues").await
    }

    pub async fn venue(&self, id: i64) -> ClientResult<Venue> {
        self.http.get(&format!("api/events/venues/{id}")).await
    }

    pub async fn create_venue(&self, payload: &VenueCreate) -> ClientResult<Venue> {
        payload.validate()?;
        self.http.post("api/events/venues", payload).await
    }

    pub async fn update_venue(&self, id: i64, payload: &VenueUpdate) -> ClientResult<Venue> {
        payload.validate()?;
        self.http
            .put(&format!("api/events/venues/{id}"), payload)
            .await
    }

    pub async fn delete_venue(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/events/venues/{id}")).await
    }

    // ========== Events ==========

    pub async fn events(&self) -> ClientResult<Vec<Event>> {
        self.http.get("api/events").await
    }

    pub async fn event(&self, id: i64) -> ClientResult<Event> {
        self.http.get(&format!("api/events/{id}")).await
    }

    pub async fn book(&self, payload: &EventBook) -> ClientResult<Event> {
        payload.validate()?;
        self.http.post("api/events/book", payload).await
    }

    pub async fn update_event(&self, id: i64, payload: &EventUpdate) -> ClientResult<Event> {
        payload.validate()?;
        self.http.put(&format!("api/events/{id}"), payload).await
    }

    pub async fn delete_event(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/events/{id}")).await
    }
}
