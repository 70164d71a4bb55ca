//! Restaurant menu view

use crate::api::MenuService;
use crate::{dispatcher, ClientConfig, ClientError, ClientResult, RecordStore};
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::{stats, RecordFilter};

/// Controller for the menu list and form pages
pub struct MenuBoard {
    service: MenuService,
    store: RecordStore<MenuItem>,
    search_term: String,
    category: Option<MenuCategory>,
    available_only: bool,
}

impl MenuBoard {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(MenuService::new(config)?))
    }

    pub fn with_service(service: MenuService) -> Self {
        Self {
            service,
            store: RecordStore::new(),
            search_term: String::new(),
            category: None,
            available_only: false,
        }
    }

    pub async fn refresh(&self) -> ClientResult<usize> {
        dispatcher::refresh(&self.store, || self.service.list()).await?;
        Ok(self.store.len().await)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_category(&mut self, category: Option<MenuCategory>) {
        self.category = category;
    }

    pub fn set_available_only(&mut self, available_only: bool) {
        self.available_only = available_only;
    }

    pub async fn items(&self) -> Vec<MenuItem> {
        self.store.snapshot().await
    }

    /// Snapshot with the active filters applied
    pub async fn filtered(&self) -> Vec<MenuItem> {
        let snapshot = self.store.snapshot().await;
        let mut filter = RecordFilter::new()
            .search(&self.search_term, |m: &MenuItem| {
                vec![m.name.as_str(), m.description.as_deref().unwrap_or("")]
            })
            .equals(self.category, |m: &MenuItem| m.category);
        if self.available_only {
            filter = filter.push(|m: &MenuItem| m.available);
        }
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    /// Item counts per category, ordered by first appearance
    pub async fn by_category(&self) -> Vec<(MenuCategory, usize)> {
        let snapshot = self.store.snapshot().await;
        stats::group_by(&snapshot, |m| m.category)
            .into_iter()
            .map(|(category, items)| (category, items.len()))
            .collect()
    }

    /// Most expensive item on the board
    pub async fn priciest(&self) -> ClientResult<MenuItem> {
        let snapshot = self.store.snapshot().await;
        let item = stats::max_by(&snapshot, |m| m.price)?;
        Ok(item.clone())
    }

    pub async fn create(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        dispatcher::dispatch(&self.store, self.service.create(payload), || {
            self.service.list()
        })
        .await
    }

    pub async fn update(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<MenuItem> {
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

    pub async fn set_availability(&self, id: i64, available: bool) -> ClientResult<MenuItem> {
        dispatcher::dispatch(
            &self.store,
            self.service.set_availability(id, available),
            || self.service.list(),
        )
        .await
    }

    /// Find a cached item by id
    pub async fn find(&self, id: i64) -> ClientResult<MenuItem> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Menu item {id}")))
    }
}
