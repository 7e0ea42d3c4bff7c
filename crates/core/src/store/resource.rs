//! # Resource Store
//!
//! Async wrapper around a [`Collection`]: one store per domain object type,
//! constructed once at startup and shared by handle. Fetch failures never
//! escape as errors - they become `Failed` status plus a detail message,
//! readable by every consumer of the same store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Collection, LoadStatus, Record};

/// Where a store's records come from on `fetch()` - a mock catalog behind a
/// simulated delay in this layer, a real backend later.
#[async_trait]
pub trait FetchSource<T>: Send + Sync {
    async fn fetch_all(&self) -> anyhow::Result<Vec<T>>;
}

/// Generic async store over one record type.
pub struct ResourceStore<T: Record> {
    name: &'static str,
    state: RwLock<Collection<T>>,
    source: Arc<dyn FetchSource<T>>,
}

impl<T: Record> ResourceStore<T> {
    pub fn new(name: &'static str, source: Arc<dyn FetchSource<T>>) -> Self {
        Self {
            name,
            state: RwLock::new(Collection::new()),
            source,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Load the collection from its source, replacing items wholesale.
    ///
    /// At most one fetch is in flight per store: a call that arrives while
    /// the status is already `Loading` is a silent no-op (no queueing, no
    /// cancellation of the in-flight call). On failure the prior items are
    /// kept and only the status and error detail change.
    pub async fn fetch(&self) {
        {
            let mut state = self.state.write().await;
            if state.status().is_loading() {
                tracing::debug!(store = self.name, "fetch already in flight, ignoring");
                return;
            }
            state.begin_loading();
        }

        match self.source.fetch_all().await {
            Ok(batch) => {
                let mut state = self.state.write().await;
                tracing::debug!(store = self.name, count = batch.len(), "fetch complete");
                state.finish_ready(batch);
            }
            Err(e) => {
                let mut state = self.state.write().await;
                tracing::warn!(store = self.name, error = %e, "fetch failed");
                state.finish_failed(e.to_string());
            }
        }
    }

    /// Prepend a locally created record (newest-first convention).
    pub async fn insert(&self, record: T) {
        self.state.write().await.insert_front(record);
    }

    /// Merge changes onto the record matching `id` and refresh its update
    /// timestamp. A missing id is tolerated as a no-op so stale detail-screen
    /// references never error. Returns whether a record was updated.
    pub async fn update(&self, id: &str, apply: impl FnOnce(&mut T) + Send) -> bool {
        self.state.write().await.update_with(id, Utc::now(), apply)
    }

    /// Remove the record matching `id`; clears a selection pointing at it.
    /// Absent ids are a no-op.
    pub async fn delete(&self, id: &str) -> bool {
        self.state.write().await.remove(id)
    }

    /// Focus `id` for detail views; clears the selection if `id` is unknown.
    pub async fn select(&self, id: &str) {
        self.state.write().await.select(id);
    }

    pub async fn clear_selection(&self) {
        self.state.write().await.clear_selection();
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items().to_vec()
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        self.state.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    pub async fn status(&self) -> LoadStatus {
        self.state.read().await.status()
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.state.read().await.error_detail().map(str::to_string)
    }

    pub async fn selection(&self) -> Option<String> {
        self.state.read().await.selection().map(str::to_string)
    }

    // Status hooks for domain operations that call the completion client
    // directly (drafting, validation): the store's status is the only
    // externally observable marker of an in-flight remote call.

    pub(crate) async fn mark_loading(&self) -> bool {
        let mut state = self.state.write().await;
        if state.status().is_loading() {
            return false;
        }
        state.begin_loading();
        true
    }

    pub(crate) async fn mark_ready(&self) {
        let mut state = self.state.write().await;
        let items = state.items().to_vec();
        state.finish_ready(items);
    }

    pub(crate) async fn mark_failed(&self, detail: impl Into<String>) {
        self.state.write().await.finish_failed(detail);
    }
}
