//! Mutation dispatcher
//!
//! Sequences a single write against the backend and resynchronizes the
//! local cache by refetching the affected collection. The cache is never
//! touched before the backend confirms the write: on failure the caller
//! gets the backend's reported reason and the prior collection stays
//! intact.

use crate::{ClientResult, RecordStore};
use std::future::Future;

/// Run a mutation, then refetch the collection into the store.
///
/// Returns the confirmed record from the mutation. A failed mutation
/// leaves the store unmodified; a failed refetch surfaces the error and
/// likewise retains the previous collection (the user re-triggers).
pub async fn dispatch<T, R, M, F, Fut>(
    store: &RecordStore<T>,
    mutation: M,
    refetch: F,
) -> ClientResult<R>
where
    T: Clone,
    M: Future<Output = ClientResult<R>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ClientResult<Vec<T>>>,
{
    let confirmed = mutation.await?;

    let ticket = store.begin_fetch();
    let records = refetch().await?;
    store.complete_fetch(ticket, records).await;

    Ok(confirmed)
}

/// Refetch a collection into the store without a preceding mutation.
///
/// Returns whether the response was installed (a concurrent newer fetch
/// wins, see `RecordStore::complete_fetch`).
pub async fn refresh<T, F, Fut>(store: &RecordStore<T>, fetch: F) -> ClientResult<bool>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ClientResult<Vec<T>>>,
{
    let ticket = store.begin_fetch();
    let records = fetch().await?;
    Ok(store.complete_fetch(ticket, records).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[tokio::test]
    async fn test_failed_mutation_leaves_store_untouched() {
        let store: RecordStore<i32> = RecordStore::new();
        let ticket = store.begin_fetch();
        store.complete_fetch(ticket, vec![1]).await;

        let result: ClientResult<i32> = dispatch(
            &store,
            async { Err(ClientError::NotFound("row 9".into())) },
            || async { Ok(vec![2]) },
        )
        .await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
        assert_eq!(store.snapshot().await, vec![1]);
    }

    #[tokio::test]
    async fn test_successful_mutation_refetches() {
        let store: RecordStore<i32> = RecordStore::new();

        let result = dispatch(&store, async { Ok(42) }, || async { Ok(vec![42]) }).await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(store.snapshot().await, vec![42]);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_collection() {
        let store: RecordStore<i32> = RecordStore::new();
        let ticket = store.begin_fetch();
        store.complete_fetch(ticket, vec![1]).await;

        let result: ClientResult<i32> = dispatch(&store, async { Ok(2) }, || async {
            Err(ClientError::InvalidResponse("truncated".into()))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(store.snapshot().await, vec![1]);
    }
}
