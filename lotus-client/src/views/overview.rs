//! Restaurant overview view
//!
//! Backs the dashboard and statistics pages. The figures are recomputed
//! locally from the loaded collections (this subsystem's statistics
//! policy); the server aggregate endpoint stays available as a
//! cross-check.

use crate::api::{MenuService, OrderService, TableService};
use crate::{ClientConfig, ClientError, ClientResult, RecordStore};
use shared::models::{
    MenuCategory, MenuItem, Order, OrderStatus, RestaurantStatistics, RestaurantTable,
    TableStatus,
};
use shared::stats;

/// Controller for the restaurant dashboard and statistics pages
pub struct RestaurantOverview {
    menu_service: MenuService,
    table_service: TableService,
    order_service: OrderService,
    menu: RecordStore<MenuItem>,
    tables: RecordStore<RestaurantTable>,
    orders: RecordStore<Order>,
}

impl RestaurantOverview {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            menu_service: MenuService::new(config)?,
            table_service: TableService::new(config)?,
            order_service: OrderService::new(config)?,
            menu: RecordStore::new(),
            tables: RecordStore::new(),
            orders: RecordStore::new(),
        })
    }

    pub fn with_services(
        menu_service: MenuService,
        table_service: TableService,
        order_service: OrderService,
    ) -> Self {
        Self {
            menu_service,
            table_service,
            order_service,
            menu: RecordStore::new(),
            tables: RecordStore::new(),
            orders: RecordStore::new(),
        }
    }

    /// Refetch all three collections together
    pub async fn refresh(&self) -> ClientResult<()> {
        let menu_ticket = self.menu.begin_fetch();
        let table_ticket = self.tables.begin_fetch();
        let order_ticket = self.orders.begin_fetch();

        let (menu, tables, orders) = tokio::try_join!(
            self.menu_service.list(),
            self.table_service.list(),
            self.order_service.list(),
        )?;

        self.menu.complete_fetch(menu_ticket, menu).await;
        self.tables.complete_fetch(table_ticket, tables).await;
        self.orders.complete_fetch(order_ticket, orders).await;
        Ok(())
    }

    /// Overview figures recomputed from the loaded collections
    pub async fn statistics(&self) -> RestaurantStatistics {
        let menu = self.menu.snapshot().await;
        let tables = self.tables.snapshot().await;
        let orders = self.orders.snapshot().await;

        RestaurantStatistics {
            total_menu_items: menu.len() as i64,
            available_menu_items: stats::count(&menu, |m| m.available) as i64,
            total_tables: tables.len() as i64,
            available_tables: stats::count(&tables, |t| t.status == TableStatus::Available)
                as i64,
            occupied_tables: stats::count(&tables, |t| t.status == TableStatus::Occupied) as i64,
            total_orders: orders.len() as i64,
            pending_orders: stats::count(&orders, |o| o.status == OrderStatus::Pending) as i64,
            active_orders: stats::count(&orders, |o| !o.status.is_terminal()) as i64,
            total_revenue: {
                let served: Vec<&Order> = orders
                    .iter()
                    .filter(|o| o.status == OrderStatus::Served)
                    .collect();
                stats::sum(&served, |o| o.total_amount)
            },
        }
    }

    /// Server-side aggregate, for cross-checking the local figures
    pub async fn server_statistics(&self) -> ClientResult<RestaurantStatistics> {
        self.order_service.statistics().await
    }

    /// Menu item counts per category, ordered by first appearance
    pub async fn menu_by_category(&self) -> Vec<(MenuCategory, i64)> {
        let menu = self.menu.snapshot().await;
        stats::group_by(&menu, |m| m.category)
            .into_iter()
            .map(|(category, items)| (category, items.len() as i64))
            .collect()
    }

    /// Order counts for every status, zero counts included
    pub async fn orders_by_status(&self) -> Vec<(OrderStatus, i64)> {
        let orders = self.orders.snapshot().await;
        OrderStatus::ALL
            .iter()
            .map(|&status| {
                (
                    status,
                    stats::count(&orders, |o| o.status == status) as i64,
                )
            })
            .collect()
    }

    /// Mean order value, absent when no orders are loaded
    pub async fn average_order_value(&self) -> Option<f64> {
        let orders = self.orders.snapshot().await;
        stats::average(&orders, |o| o.total_amount)
    }

    /// The largest order on the board
    pub async fn largest_order(&self) -> ClientResult<Order> {
        let orders = self.orders.snapshot().await;
        let largest = stats::max_by(&orders, |o| o.total_amount)?;
        Ok(largest.clone())
    }

    /// Share of served orders across everything loaded
    pub async fn served_share(&self) -> f64 {
        let orders = self.orders.snapshot().await;
        let served = stats::count(&orders, |o| o.status == OrderStatus::Served);
        stats::percentage(served as f64, orders.len() as f64)
    }

    /// Find a cached order by id
    pub async fn find_order(&self, id: i64) -> ClientResult<Order> {
        self.orders
            .snapshot()
            .await
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Order {id}")))
    }
}
