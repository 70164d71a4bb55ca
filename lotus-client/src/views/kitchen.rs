//! Kitchen queue view
//!
//! Kitchen tickets only ever move one step forward; there is no
//! cancellation path on this surface.

use crate::api::KitchenService;
use crate::{dispatcher, ClientConfig, ClientError, ClientResult, RecordStore};
use shared::models::{
    KitchenDashboardCounts, KitchenOrder, KitchenOrderCreate, KitchenOrderStatus,
};
use shared::{stats, RecordFilter, TransitionError};

/// Controller for the kitchen order queue and dashboard
pub struct KitchenQueue {
    service: KitchenService,
    store: RecordStore<KitchenOrder>,
    status: Option<KitchenOrderStatus>,
}

impl KitchenQueue {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(KitchenService::new(config)?))
    }

    pub fn with_service(service: KitchenService) -> Self {
        Self {
            service,
            store: RecordStore::new(),
            status: None,
        }
    }

    pub async fn refresh(&self) -> ClientResult<usize> {
        let ticket = self.store.begin_fetch();
        let orders = self.service.orders().await?;
        for order in &orders {
            if !order.total_is_consistent() {
                tracing::warn!(
                    order_id = order.id,
                    reported = order.total_amount,
                    computed = order.computed_total(),
                    "Kitchen order total does not match its items"
                );
            }
        }
        self.store.complete_fetch(ticket, orders).await;
        Ok(self.store.len().await)
    }

    pub fn set_status_filter(&mut self, status: Option<KitchenOrderStatus>) {
        self.status = status;
    }

    pub async fn orders(&self) -> Vec<KitchenOrder> {
        self.store.snapshot().await
    }

    pub async fn filtered(&self) -> Vec<KitchenOrder> {
        let snapshot = self.store.snapshot().await;
        let filter =
            RecordFilter::new().equals(self.status, |o: &KitchenOrder| o.status);
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    /// One lane per status, in board order, empty lanes included
    pub async fn lanes(&self) -> Vec<(KitchenOrderStatus, Vec<KitchenOrder>)> {
        let snapshot = self.store.snapshot().await;
        KitchenOrderStatus::ALL
            .iter()
            .map(|&status| {
                let members = snapshot
                    .iter()
                    .filter(|o| o.status == status)
                    .cloned()
                    .collect();
                (status, members)
            })
            .collect()
    }

    async fn cached(&self, id: i64) -> ClientResult<KitchenOrder> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Kitchen order {id}")))
    }

    /// Move a ticket one step forward in the progression.
    ///
    /// A served ticket fails with `AlreadyTerminal` before any request;
    /// a backend refusal surfaces as `TransitionRejected` and the queue
    /// keeps its previous state.
    pub async fn advance(&self, id: i64) -> ClientResult<KitchenOrder> {
        let current = self.cached(id).await?;
        let target = current
            .status
            .next()
            .ok_or_else(|| TransitionError::terminal(current.status.as_str()))?;

        dispatcher::dispatch(
            &self.store,
            async {
                self.service
                    .update_order_status(id, target)
                    .await
                    .map_err(|err| match err {
                        ClientError::Validation(message) => {
                            ClientError::TransitionRejected(message)
                        }
                        ClientError::Api { message, .. } => {
                            ClientError::TransitionRejected(message)
                        }
                        other => other,
                    })
            },
            || self.service.orders(),
        )
        .await
    }

    pub async fn create(&self, payload: &KitchenOrderCreate) -> ClientResult<KitchenOrder> {
        dispatcher::dispatch(&self.store, self.service.create_order(payload), || {
            self.service.orders()
        })
        .await
    }

    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        dispatcher::dispatch(&self.store, self.service.delete_order(id), || {
            self.service.orders()
        })
        .await
    }

    /// Dashboard counts recomputed from the loaded queue
    pub async fn local_counts(&self) -> KitchenDashboardCounts {
        let snapshot = self.store.snapshot().await;
        KitchenDashboardCounts {
            pending: stats::count(&snapshot, |o| o.status == KitchenOrderStatus::Pending) as i64,
            cooking: stats::count(&snapshot, |o| o.status == KitchenOrderStatus::Cooking) as i64,
            ready: stats::count(&snapshot, |o| o.status == KitchenOrderStatus::Ready) as i64,
            served: stats::count(&snapshot, |o| o.status == KitchenOrderStatus::Served) as i64,
        }
    }

    /// Server-reported dashboard counts
    pub async fn server_counts(&self) -> ClientResult<KitchenDashboardCounts> {
        self.service.dashboard_counts().await
    }
}
