//! Table plan view

use crate::api::TableService;
use crate::{dispatcher, ClientConfig, ClientResult, RecordStore};
use shared::models::{
    RestaurantTable, RestaurantTableCreate, RestaurantTableUpdate, TableStatus,
};
use shared::{stats, RecordFilter};

/// Controller for the table list and form pages
pub struct TablePlan {
    service: TableService,
    store: RecordStore<RestaurantTable>,
    status: Option<TableStatus>,
}

impl TablePlan {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(TableService::new(config)?))
    }

    pub fn with_service(service: TableService) -> Self {
        Self {
            service,
            store: RecordStore::new(),
            status: None,
        }
    }

    pub async fn refresh(&self) -> ClientResult<usize> {
        dispatcher::refresh(&self.store, || self.service.list()).await?;
        Ok(self.store.len().await)
    }

    pub fn set_status_filter(&mut self, status: Option<TableStatus>) {
        self.status = status;
    }

    pub async fn tables(&self) -> Vec<RestaurantTable> {
        self.store.snapshot().await
    }

    pub async fn filtered(&self) -> Vec<RestaurantTable> {
        let snapshot = self.store.snapshot().await;
        let filter =
            RecordFilter::new().equals(self.status, |t: &RestaurantTable| t.status);
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    pub async fn create(&self, payload: &RestaurantTableCreate) -> ClientResult<RestaurantTable> {
        dispatcher::dispatch(&self.store, self.service.create(payload), || {
            self.service.list()
        })
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &RestaurantTableUpdate,
    ) -> ClientResult<RestaurantTable> {
        dispatcher::dispatch(&self.store, self.service.update(id, payload), || {
            self.service.list()
        })
        .await
    }

    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        dispatcher::dispatch(&self.store, self.service.delete(id), || {
            self.service.list()
        })
        .await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: TableStatus,
    ) -> ClientResult<RestaurantTable> {
        dispatcher::dispatch(&self.store, self.service.update_status(id, status), || {
            self.service.list()
        })
        .await
    }

    /// Share of occupied tables, 0.0 on an empty plan
    pub async fn occupancy(&self) -> f64 {
        let snapshot = self.store.snapshot().await;
        let occupied = stats::count(&snapshot, |t| t.status == TableStatus::Occupied);
        stats::percentage(occupied as f64, snapshot.len() as f64)
    }
}
