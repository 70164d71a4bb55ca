//! Restaurant order board view
//!
//! Status transitions go through the state machine before any request is
//! issued; the backend stays the single source of truth for whether a
//! legal-looking transition actually lands (a racing cashier may have
//! moved the order first).

use crate::api::OrderService;
use crate::{dispatcher, ClientConfig, ClientError, ClientResult, RecordStore};
use shared::models::{Order, OrderCreate, OrderStatus};
use shared::{stats, RecordFilter, TransitionError};

/// Controller for the order list and detail pages
pub struct OrderBoard {
    service: OrderService,
    store: RecordStore<Order>,
    status: Option<OrderStatus>,
    search_term: String,
}

impl OrderBoard {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(OrderService::new(config)?))
    }

    pub fn with_service(service: OrderService) -> Self {
        Self {
            service,
            store: RecordStore::new(),
            status: None,
            search_term: String::new(),
        }
    }

    /// Refetch the collection, checking the order-total invariant on the
    /// way in. A mismatch is the backend's bug to fix; the board logs it
    /// and keeps the reported record.
    pub async fn refresh(&self) -> ClientResult<usize> {
        let ticket = self.store.begin_fetch();
        let orders = self.service.list().await?;
        for order in &orders {
            if !order.total_is_consistent() {
                tracing::warn!(
                    order = %order.order_number,
                    reported = order.total_amount,
                    computed = order.computed_total(),
                    "Order total does not match its items"
                );
            }
        }
        self.store.complete_fetch(ticket, orders).await;
        Ok(self.store.len().await)
    }

    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.status = status;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.store.snapshot().await
    }

    /// Snapshot with the active filters applied
    pub async fn filtered(&self) -> Vec<Order> {
        let snapshot = self.store.snapshot().await;
        let filter = RecordFilter::new()
            .search(&self.search_term, |o: &Order| {
                vec![
                    o.order_number.as_str(),
                    o.customer_name.as_deref().unwrap_or(""),
                ]
            })
            .equals(self.status, |o: &Order| o.status);
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    async fn cached(&self, id: i64) -> ClientResult<Order> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Order {id}")))
    }

    /// Request a status change.
    ///
    /// Fails with `InvalidTransition` before any request when the target
    /// is neither the forward successor nor a cancellation; a backend
    /// refusal comes back as `TransitionRejected` with the server's
    /// reason, and the cached collection stays as it was.
    pub async fn apply_transition(&self, id: i64, target: OrderStatus) -> ClientResult<Order> {
        let current = self.cached(id).await?;
        current.status.check_transition(target)?;

        dispatcher::dispatch(
            &self.store,
            async {
                self.service
                    .update_status(id, target)
                    .await
                    .map_err(Self::as_rejection)
            },
            || self.service.list(),
        )
        .await
    }

    /// Move an order one step forward in the progression
    pub async fn advance(&self, id: i64) -> ClientResult<Order> {
        let current = self.cached(id).await?;
        let target = current
            .status
            .next()
            .ok_or_else(|| TransitionError::terminal(current.status.as_str()))?;
        self.apply_transition(id, target).await
    }

    pub async fn cancel(&self, id: i64) -> ClientResult<Order> {
        self.apply_transition(id, OrderStatus::Cancelled).await
    }

    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Order> {
        dispatcher::dispatch(&self.store, self.service.create(payload), || {
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

    /// Revenue over served orders
    pub async fn revenue(&self) -> f64 {
        let snapshot = self.store.snapshot().await;
        let served: Vec<&Order> = snapshot
            .iter()
            .filter(|o| o.status == OrderStatus::Served)
            .collect();
        stats::sum(&served, |o| o.total_amount)
    }

    fn as_rejection(err: ClientError) -> ClientError {
        match err {
            ClientError::Validation(message) => ClientError::TransitionRejected(message),
            ClientError::Api { message, .. } => ClientError::TransitionRejected(message),
            other => other,
        }
    }
}
