//! # Fundraising Checklist Store
//!
//! Checklist categories are fetched (and only ever fetched); which items are
//! done is the founder's own progress, persisted separately so it outlives
//! both the process and any catalog refresh.

use std::sync::Arc;

use super::mock::{seed_checklist, MockSource, DEFAULT_LATENCY};
use crate::models::ChecklistCategory;
use crate::storage::{keys, KeyValueStorage};
use crate::store::{FetchSource, LoadStatus, ProgressSet, ResourceStore};

pub struct ChecklistStore {
    inner: ResourceStore<ChecklistCategory>,
    progress: ProgressSet,
}

impl ChecklistStore {
    pub async fn new(
        source: Arc<dyn FetchSource<ChecklistCategory>>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            inner: ResourceStore::new("checklist", source),
            progress: ProgressSet::load(keys::CHECKLIST, storage).await,
        }
    }

    pub async fn with_seed_data(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::new(
            Arc::new(MockSource::new(seed_checklist(), DEFAULT_LATENCY)),
            storage,
        )
        .await
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    pub async fn categories(&self) -> Vec<ChecklistCategory> {
        self.inner.items().await
    }

    /// Total item count across all categories.
    pub async fn total_items(&self) -> usize {
        self.inner
            .items()
            .await
            .iter()
            .map(|category| category.items.len())
            .sum()
    }

    /// Flip one item's done state; persisted on every flip.
    pub async fn toggle_item(&self, item_id: &str) -> bool {
        self.progress.toggle(item_id).await
    }

    pub async fn is_complete(&self, item_id: &str) -> bool {
        self.progress.contains(item_id).await
    }

    /// Overall completion as a whole percentage, recomputed on every call;
    /// 0 when no items have been fetched yet.
    pub async fn completion_percentage(&self) -> u8 {
        let total = self.total_items().await;
        self.progress.completion_percentage(total).await
    }

    /// `(done, total)` for one category; `None` for an unknown category id.
    pub async fn category_progress(&self, category_id: &str) -> Option<(usize, usize)> {
        let category = self.inner.get(category_id).await?;
        let mut done = 0;
        for item in &category.items {
            if self.progress.contains(&item.id).await {
                done += 1;
            }
        }
        Some((done, category.items.len()))
    }

    pub async fn status(&self) -> LoadStatus {
        self.inner.status().await
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.inner.error_detail().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::storage::MemoryStorage;

    async fn seeded_store(storage: Arc<dyn KeyValueStorage>) -> ChecklistStore {
        let store = ChecklistStore::new(
            Arc::new(MockSource::new(seed_checklist(), Duration::ZERO)),
            storage,
        )
        .await;
        store.fetch().await;
        store
    }

    #[tokio::test]
    async fn test_seeded_checklist_has_four_categories_eleven_items() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let store = seeded_store(storage).await;

        assert_eq!(store.categories().await.len(), 4);
        assert_eq!(store.total_items().await, 11);
        assert_eq!(store.completion_percentage().await, 0);
    }

    #[tokio::test]
    async fn test_three_of_eleven_rounds_to_twenty_seven() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let store = seeded_store(storage).await;

        store.toggle_item("cl-1").await;
        store.toggle_item("cl-4").await;
        store.toggle_item("cl-10").await;

        assert_eq!(store.completion_percentage().await, 27);
    }

    #[tokio::test]
    async fn test_percentage_before_fetch_is_zero() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let store = ChecklistStore::new(
            Arc::new(MockSource::new(seed_checklist(), Duration::ZERO)),
            storage,
        )
        .await;

        // No items fetched yet: defined as 0, no division by zero.
        assert_eq!(store.completion_percentage().await, 0);
    }

    #[tokio::test]
    async fn test_category_progress_counts_only_its_items() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let store = seeded_store(storage).await;

        store.toggle_item("cl-1").await;
        store.toggle_item("cl-2").await;
        store.toggle_item("cl-10").await;

        assert_eq!(store.category_progress("cl-formation").await, Some((2, 3)));
        assert_eq!(store.category_progress("cl-materials").await, Some((1, 2)));
        assert_eq!(store.category_progress("cl-unknown").await, None);
    }

    #[tokio::test]
    async fn test_progress_survives_restart_while_items_refetch() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let store = seeded_store(Arc::clone(&storage)).await;
        store.toggle_item("cl-7").await;

        let rehydrated = seeded_store(storage).await;
        assert!(rehydrated.is_complete("cl-7").await);
        assert_eq!(rehydrated.completion_percentage().await, 9); // 1 of 11
    }
}
