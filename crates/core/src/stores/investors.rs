//! # Investor Store
//!
//! Read-mostly investor directory; the profile screen follows the selection.

use std::sync::Arc;

use super::mock::{seed_investors, MockSource, DEFAULT_LATENCY};
use crate::models::{InvestmentStage, Investor};
use crate::store::{FetchSource, LoadStatus, ResourceStore};

pub struct InvestorStore {
    inner: ResourceStore<Investor>,
}

impl InvestorStore {
    pub fn new(source: Arc<dyn FetchSource<Investor>>) -> Self {
        Self {
            inner: ResourceStore::new("investors", source),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MockSource::new(seed_investors(), DEFAULT_LATENCY)))
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    pub async fn investors(&self) -> Vec<Investor> {
        self.inner.items().await
    }

    /// Directory filtered to one stage, in catalog order.
    pub async fn by_stage(&self, stage: InvestmentStage) -> Vec<Investor> {
        self.inner
            .items()
            .await
            .into_iter()
            .filter(|investor| investor.stage == stage)
            .collect()
    }

    pub async fn select(&self, id: &str) {
        self.inner.select(id).await;
    }

    pub async fn get(&self, id: &str) -> Option<Investor> {
        self.inner.get(id).await
    }

    pub async fn selection(&self) -> Option<String> {
        self.inner.selection().await
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

    fn seeded_store() -> InvestorStore {
        InvestorStore::new(Arc::new(MockSource::new(seed_investors(), Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_stage_filter_returns_matching_entries() {
        let store = seeded_store();
        store.fetch().await;

        let seed_stage = store.by_stage(InvestmentStage::Seed).await;
        assert_eq!(seed_stage.len(), 2);
        assert!(seed_stage.iter().all(|i| i.stage == InvestmentStage::Seed));
    }

    #[tokio::test]
    async fn test_selection_follows_present_ids_only() {
        let store = seeded_store();
        store.fetch().await;

        store.select("inv-2").await;
        assert_eq!(store.selection().await.as_deref(), Some("inv-2"));

        store.select("inv-99").await;
        assert_eq!(store.selection().await, None);
    }
}
