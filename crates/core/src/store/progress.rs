//! # Progress Set
//!
//! A persisted set of completed item ids, decoupled from the item definitions
//! themselves (definitions are re-fetched, progress survives restarts). Used
//! by the checklist and milestone stores.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::storage::KeyValueStorage;

/// Completed-id set with write-through persistence under one storage key.
pub struct ProgressSet {
    key: &'static str,
    completed: RwLock<HashSet<String>>,
    storage: Arc<dyn KeyValueStorage>,
}

impl ProgressSet {
    /// Rehydrate the set from storage. A missing key starts empty; a corrupt
    /// or unreadable entry is logged and degrades to empty rather than
    /// failing construction.
    pub async fn load(key: &'static str, storage: Arc<dyn KeyValueStorage>) -> Self {
        let completed = match storage.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(key, error = %e, "discarding corrupt progress entry");
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "progress rehydration failed, starting empty");
                HashSet::new()
            }
        };

        Self {
            key,
            completed: RwLock::new(completed),
            storage,
        }
    }

    /// Flip membership of `id` and persist the new set. Returns whether the
    /// id is completed after the flip. Two toggles of the same id restore the
    /// original membership.
    pub async fn toggle(&self, id: &str) -> bool {
        let now_completed = {
            let mut set = self.completed.write().await;
            if set.remove(id) {
                false
            } else {
                set.insert(id.to_string());
                true
            }
        };
        self.persist().await;
        now_completed
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.completed.read().await.contains(id)
    }

    pub async fn count(&self) -> usize {
        self.completed.read().await.len()
    }

    pub async fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.completed.read().await.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Drop `id` from the set (used when its item is deleted) and persist.
    pub async fn forget(&self, id: &str) {
        let removed = self.completed.write().await.remove(id);
        if removed {
            self.persist().await;
        }
    }

    /// Completed share of `total` items as a whole percentage, rounded.
    /// Defined as 0 for an empty collection.
    pub async fn completion_percentage(&self, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let done = self.completed.read().await.len();
        (100.0 * done as f64 / total as f64).round() as u8
    }

    async fn persist(&self) {
        let ids = self.ids().await;
        let payload = match serde_json::to_string(&ids) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "failed to serialize progress");
                return;
            }
        };
        if let Err(e) = self.storage.set(self.key, &payload).await {
            // Persistence is best-effort: the in-memory flip already
            // happened and must stay visible to the UI.
            tracing::warn!(key = self.key, error = %e, "failed to persist progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_toggle_is_an_involution() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let progress = ProgressSet::load("test.progress", storage).await;

        assert!(progress.toggle("item-1").await);
        assert!(progress.contains("item-1").await);

        assert!(!progress.toggle("item-1").await);
        assert!(!progress.contains("item-1").await);
        assert_eq!(progress.count().await, 0);
    }

    #[tokio::test]
    async fn test_percentage_with_zero_total_is_zero() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let progress = ProgressSet::load("test.progress", storage).await;

        assert_eq!(progress.completion_percentage(0).await, 0);
    }

    #[tokio::test]
    async fn test_percentage_rounds_to_nearest_whole() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let progress = ProgressSet::load("test.progress", storage).await;

        progress.toggle("a").await;
        progress.toggle("b").await;
        progress.toggle("c").await;

        // 3 of 11 -> 27.27 -> 27
        assert_eq!(progress.completion_percentage(11).await, 27);
    }

    #[tokio::test]
    async fn test_progress_survives_reload_from_same_storage() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let progress = ProgressSet::load("test.progress", Arc::clone(&storage)).await;
        progress.toggle("a").await;
        progress.toggle("b").await;

        let rehydrated = ProgressSet::load("test.progress", storage).await;
        assert_eq!(rehydrated.count().await, 2);
        assert!(rehydrated.contains("a").await);
        assert!(rehydrated.contains("b").await);
    }

    #[tokio::test]
    async fn test_corrupt_entry_degrades_to_empty() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        storage.set("test.progress", "not json at all").await.unwrap();

        let progress = ProgressSet::load("test.progress", storage).await;
        assert_eq!(progress.count().await, 0);
    }
}
