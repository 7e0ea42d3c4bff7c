//! # App Services
//!
//! Every store, constructed exactly once at application startup with an
//! injected storage adapter and completion client, and handed to consumers by
//! handle. This replaces the original layer's lazily created global
//! singletons with explicit single instances - same one-per-process
//! semantics, no hidden global state.

use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::storage::KeyValueStorage;
use crate::stores::{
    BusinessPlanStore, ChecklistStore, CircleStore, ConversationStore, InvestorStore,
    LegalTemplateStore, MilestoneStore, PitchDeckStore, SubscriptionStore, ValidationStore,
};

/// The store layer's single entry point. Clone the `Arc` handles freely;
/// every consumer observes the same state.
pub struct AppServices {
    pub conversations: Arc<ConversationStore>,
    pub pitch_decks: Arc<PitchDeckStore>,
    pub business_plans: Arc<BusinessPlanStore>,
    pub milestones: Arc<MilestoneStore>,
    pub checklist: Arc<ChecklistStore>,
    pub investors: Arc<InvestorStore>,
    pub legal_templates: Arc<LegalTemplateStore>,
    pub circles: Arc<CircleStore>,
    pub validations: Arc<ValidationStore>,
    pub subscription: Arc<SubscriptionStore>,
}

impl AppServices {
    /// Build all stores over seeded catalogs. Persisted state (checklist and
    /// milestone progress, subscription) is rehydrated here, before any
    /// consumer can observe a store.
    pub async fn new(
        storage: Arc<dyn KeyValueStorage>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        let services = Self {
            conversations: Arc::new(ConversationStore::with_seed_data()),
            pitch_decks: Arc::new(PitchDeckStore::with_seed_data()),
            business_plans: Arc::new(BusinessPlanStore::with_seed_data(Arc::clone(&completion))),
            milestones: Arc::new(MilestoneStore::with_seed_data(Arc::clone(&storage)).await),
            checklist: Arc::new(ChecklistStore::with_seed_data(Arc::clone(&storage)).await),
            investors: Arc::new(InvestorStore::with_seed_data()),
            legal_templates: Arc::new(LegalTemplateStore::with_seed_data()),
            circles: Arc::new(CircleStore::with_seed_data()),
            validations: Arc::new(ValidationStore::new(completion)),
            subscription: Arc::new(SubscriptionStore::load(storage).await),
        };
        tracing::info!("app services initialized");
        services
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::completion::PromptMessage;
    use crate::error::StoreError;
    use crate::models::PlanTier;
    use crate::storage::MemoryStorage;

    struct NoopClient;

    #[async_trait]
    impl CompletionClient for NoopClient {
        async fn complete(&self, _messages: &[PromptMessage]) -> Result<String, StoreError> {
            Ok("{}".to_string())
        }
    }

    #[tokio::test]
    async fn test_services_share_state_across_handles() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let services = AppServices::new(storage, Arc::new(NoopClient)).await;

        let handle_a = Arc::clone(&services.subscription);
        let handle_b = Arc::clone(&services.subscription);

        handle_a.set_tier(PlanTier::Premium, None).await;
        assert!(handle_b.is_premium().await);
    }

    #[tokio::test]
    async fn test_progress_rehydrates_across_service_rebuilds() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let services = AppServices::new(Arc::clone(&storage), Arc::new(NoopClient)).await;
        services.checklist.toggle_item("cl-3").await;

        let rebuilt = AppServices::new(storage, Arc::new(NoopClient)).await;
        assert!(rebuilt.checklist.is_complete("cl-3").await);
    }
}
