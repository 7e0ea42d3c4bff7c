//! # Legal Template Store
//!
//! Read-only catalog of legal document templates.

use std::sync::Arc;

use super::mock::{seed_legal_templates, MockSource, DEFAULT_LATENCY};
use crate::models::LegalTemplate;
use crate::store::{FetchSource, LoadStatus, ResourceStore};

pub struct LegalTemplateStore {
    inner: ResourceStore<LegalTemplate>,
}

impl LegalTemplateStore {
    pub fn new(source: Arc<dyn FetchSource<LegalTemplate>>) -> Self {
        Self {
            inner: ResourceStore::new("legal_templates", source),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MockSource::new(
            seed_legal_templates(),
            DEFAULT_LATENCY,
        )))
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    pub async fn templates(&self) -> Vec<LegalTemplate> {
        self.inner.items().await
    }

    pub async fn by_category(&self, category: &str) -> Vec<LegalTemplate> {
        self.inner
            .items()
            .await
            .into_iter()
            .filter(|template| template.category == category)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<LegalTemplate> {
        self.inner.get(id).await
    }

    pub async fn status(&self) -> LoadStatus {
        self.inner.status().await
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.inner.error_detail().await
    }
}
