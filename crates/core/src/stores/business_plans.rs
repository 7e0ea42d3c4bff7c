//! # Business Plan Store
//!
//! Plan documents plus AI-assisted section drafting. Drafting calls the
//! completion client; while it runs the store reads as `Loading`, and a
//! transport failure degrades to a friendly placeholder body instead of an
//! error surface.

use std::sync::Arc;

use chrono::Utc;

use super::mock::MockSource;
use crate::completion::{CompletionClient, PromptMessage};
use crate::error::StoreError;
use crate::models::{generate_id, BusinessPlan, PlanSection};
use crate::store::{FetchSource, LoadStatus, ResourceStore};

/// Body stored when the drafting service cannot be reached.
const DRAFT_FALLBACK: &str =
    "We couldn't reach the drafting service. Check your connection and try again.";

pub struct BusinessPlanStore {
    inner: ResourceStore<BusinessPlan>,
    completion: Arc<dyn CompletionClient>,
}

impl BusinessPlanStore {
    pub fn new(
        source: Arc<dyn FetchSource<BusinessPlan>>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            inner: ResourceStore::new("business_plans", source),
            completion,
        }
    }

    /// Plans are created in-app; the default source serves an empty catalog.
    pub fn with_seed_data(completion: Arc<dyn CompletionClient>) -> Self {
        Self::new(Arc::new(MockSource::empty()), completion)
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    pub async fn create_plan(&self, title: &str) -> Result<BusinessPlan, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("plan title is required".to_string()));
        }

        let now = Utc::now();
        let plan = BusinessPlan {
            id: generate_id("plan"),
            title: title.to_string(),
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.inner.insert(plan.clone()).await;
        Ok(plan)
    }

    /// Draft (or re-draft) one section body via the completion client and
    /// store it on the plan.
    ///
    /// A stale plan id is a silent no-op. While a draft is already in flight
    /// the call is suppressed, mirroring the fetch re-entrancy guard. A
    /// transport failure stores [`DRAFT_FALLBACK`] as the section body - the
    /// user sees a friendly message in place, never a raw error.
    pub async fn draft_section(&self, plan_id: &str, section_name: &str) -> Result<(), StoreError> {
        let name = section_name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "section name is required".to_string(),
            ));
        }

        let Some(plan) = self.inner.get(plan_id).await else {
            tracing::debug!(plan_id, "draft requested for unknown plan, ignoring");
            return Ok(());
        };

        if !self.inner.mark_loading().await {
            return Ok(());
        }

        let messages = [
            PromptMessage::system(
                "You are a startup business-plan writer. Draft the requested section \
                 in two or three concise paragraphs of plain text.",
            ),
            PromptMessage::user(format!(
                "Business plan: \"{}\". Draft the \"{}\" section.",
                plan.title, name
            )),
        ];

        let body = match self.completion.complete(&messages).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(plan_id, section = name, error = %e, "section draft failed, storing placeholder");
                DRAFT_FALLBACK.to_string()
            }
        };

        let name = name.to_string();
        self.inner
            .update(plan_id, move |plan| {
                match plan.sections.iter().position(|s| s.name == name) {
                    Some(idx) => plan.sections[idx].body = body,
                    None => plan.sections.push(PlanSection { name, body }),
                }
            })
            .await;
        self.inner.mark_ready().await;

        Ok(())
    }

    pub async fn delete_plan(&self, id: &str) {
        self.inner.delete(id).await;
    }

    pub async fn select(&self, id: &str) {
        self.inner.select(id).await;
    }

    pub async fn plans(&self) -> Vec<BusinessPlan> {
        self.inner.items().await
    }

    pub async fn get(&self, id: &str) -> Option<BusinessPlan> {
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
    use async_trait::async_trait;

    struct CannedClient(Result<String, String>);

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, _messages: &[PromptMessage]) -> Result<String, StoreError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(StoreError::Transport(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_draft_section_stores_completion_text() {
        let client = Arc::new(CannedClient(Ok("A focused go-to-market plan.".to_string())));
        let store = BusinessPlanStore::with_seed_data(client);
        let plan = store.create_plan("CoFoundry").await.unwrap();

        store.draft_section(&plan.id, "Go-to-market").await.unwrap();

        let plan = store.get(&plan.id).await.unwrap();
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.sections[0].name, "Go-to-market");
        assert_eq!(plan.sections[0].body, "A focused go-to-market plan.");
        assert_eq!(store.status().await, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn test_draft_failure_stores_friendly_placeholder() {
        let client = Arc::new(CannedClient(Err("connection refused".to_string())));
        let store = BusinessPlanStore::with_seed_data(client);
        let plan = store.create_plan("CoFoundry").await.unwrap();

        store.draft_section(&plan.id, "Financials").await.unwrap();

        let plan = store.get(&plan.id).await.unwrap();
        assert_eq!(plan.sections[0].body, DRAFT_FALLBACK);
        // The failure degraded to content, not to an error state.
        assert_eq!(store.status().await, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn test_redraft_replaces_existing_section_body() {
        let client = Arc::new(CannedClient(Ok("Second draft.".to_string())));
        let store = BusinessPlanStore::with_seed_data(client);
        let plan = store.create_plan("CoFoundry").await.unwrap();

        store.draft_section(&plan.id, "Team").await.unwrap();
        store.draft_section(&plan.id, "Team").await.unwrap();

        let plan = store.get(&plan.id).await.unwrap();
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.sections[0].body, "Second draft.");
    }

    #[tokio::test]
    async fn test_draft_for_unknown_plan_is_noop() {
        let client = Arc::new(CannedClient(Ok("text".to_string())));
        let store = BusinessPlanStore::with_seed_data(client);

        store.draft_section("plan-gone", "Team").await.unwrap();
        assert!(store.plans().await.is_empty());
    }
}
