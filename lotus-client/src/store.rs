//! Record store
//!
//! An ephemeral, fetch-refreshed cache of one backend collection. The
//! backend owns every record; the store only ever holds what the last
//! confirmed fetch returned. Fetches are tagged with a monotonic sequence
//! number so that a response resolving out of order is discarded instead
//! of clobbering newer data.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Sequence tag handed out when a fetch begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// In-memory collection cache with stale-response guarding
#[derive(Debug)]
pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
    /// Last handed-out fetch sequence
    fetch_seq: AtomicU64,
    /// Sequence of the currently installed collection
    installed_seq: AtomicU64,
}

impl<T: Clone> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fetch_seq: AtomicU64::new(0),
            installed_seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the cached collection
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Tag a new fetch. Call before issuing the request.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install a fetched collection unless a newer fetch already landed.
    ///
    /// Returns `false` when the response was stale and discarded.
    pub async fn complete_fetch(&self, ticket: FetchTicket, records: Vec<T>) -> bool {
        let mut guard = self.records.write().await;
        if ticket.0 <= self.installed_seq.load(Ordering::SeqCst) {
            tracing::debug!(seq = ticket.0, "Discarding stale fetch response");
            return false;
        }
        self.installed_seq.store(ticket.0, Ordering::SeqCst);
        *guard = records;
        true
    }
}

impl<T: Clone> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_install_and_snapshot() {
        let store = RecordStore::new();
        let ticket = store.begin_fetch();
        assert!(store.complete_fetch(ticket, vec![1, 2, 3]).await);
        assert_eq!(store.snapshot().await, vec![1, 2, 3]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let store = RecordStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        // The later fetch resolves first; the earlier response must lose.
        assert!(store.complete_fetch(second, vec![20]).await);
        assert!(!store.complete_fetch(first, vec![10]).await);
        assert_eq!(store.snapshot().await, vec![20]);
    }

    #[tokio::test]
    async fn test_in_order_responses_both_install() {
        let store = RecordStore::new();
        let first = store.begin_fetch();
        assert!(store.complete_fetch(first, vec![1]).await);
        let second = store.begin_fetch();
        assert!(store.complete_fetch(second, vec![2]).await);
        assert_eq!(store.snapshot().await, vec![2]);
    }
}
