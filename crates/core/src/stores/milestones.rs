//! # Milestone Store
//!
//! Startup milestones with a persisted completed-id set. Definitions are
//! re-fetched; completion survives restarts under its own storage key.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::mock::{seed_milestones, MockSource, DEFAULT_LATENCY};
use crate::error::StoreError;
use crate::models::{generate_id, Milestone};
use crate::storage::{keys, KeyValueStorage};
use crate::store::{FetchSource, LoadStatus, ProgressSet, ResourceStore};

/// Partial update for a milestone; unset fields keep their current value.
#[derive(Debug, Default)]
pub struct MilestoneUpdate {
    pub title: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub notes: Option<Option<String>>,
}

pub struct MilestoneStore {
    inner: ResourceStore<Milestone>,
    progress: ProgressSet,
}

impl MilestoneStore {
    /// Construct and rehydrate the completed set before any consumer can
    /// observe the store.
    pub async fn new(
        source: Arc<dyn FetchSource<Milestone>>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            inner: ResourceStore::new("milestones", source),
            progress: ProgressSet::load(keys::MILESTONES, storage).await,
        }
    }

    pub async fn with_seed_data(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::new(
            Arc::new(MockSource::new(seed_milestones(), DEFAULT_LATENCY)),
            storage,
        )
        .await
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    pub async fn add_milestone(
        &self,
        title: &str,
        target_date: DateTime<Utc>,
        notes: Option<&str>,
    ) -> Result<Milestone, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation(
                "milestone title is required".to_string(),
            ));
        }

        let now = Utc::now();
        let milestone = Milestone {
            id: generate_id("ms"),
            title: title.to_string(),
            target_date,
            notes: notes.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        self.inner.insert(milestone.clone()).await;
        Ok(milestone)
    }

    pub async fn update_milestone(&self, id: &str, update: MilestoneUpdate) {
        self.inner
            .update(id, move |milestone| {
                if let Some(title) = update.title {
                    milestone.title = title;
                }
                if let Some(target_date) = update.target_date {
                    milestone.target_date = target_date;
                }
                if let Some(notes) = update.notes {
                    milestone.notes = notes;
                }
            })
            .await;
    }

    /// Remove the milestone and any persisted completion for it.
    pub async fn delete_milestone(&self, id: &str) {
        if self.inner.delete(id).await {
            self.progress.forget(id).await;
        }
    }

    /// Flip completion for a milestone; persisted on every flip.
    pub async fn toggle_complete(&self, id: &str) -> bool {
        self.progress.toggle(id).await
    }

    pub async fn is_complete(&self, id: &str) -> bool {
        self.progress.contains(id).await
    }

    /// Share of milestones completed, recomputed on every call.
    pub async fn completion_percentage(&self) -> u8 {
        let total = self.inner.len().await;
        self.progress.completion_percentage(total).await
    }

    pub async fn milestones(&self) -> Vec<Milestone> {
        self.inner.items().await
    }

    pub async fn get(&self, id: &str) -> Option<Milestone> {
        self.inner.get(id).await
    }

    pub async fn status(&self) -> LoadStatus {
        self.inner.status().await
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.inner.error_detail().await
    }
}
