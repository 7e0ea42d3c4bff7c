//! # Subscription Store
//!
//! The founder's plan tier. The whole record is persisted and rehydrated at
//! startup; there is no remote billing call in this layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::{PlanTier, Subscription};
use crate::storage::{keys, KeyValueStorage};

pub struct SubscriptionStore {
    state: RwLock<Subscription>,
    storage: Arc<dyn KeyValueStorage>,
}

impl SubscriptionStore {
    /// Rehydrate from storage; a missing or corrupt entry degrades to the
    /// free tier rather than failing construction.
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let subscription = match storage.get(keys::SUBSCRIPTION).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding corrupt subscription entry");
                Subscription::default()
            }),
            Ok(None) => Subscription::default(),
            Err(e) => {
                tracing::warn!(error = %e, "subscription rehydration failed, defaulting to free");
                Subscription::default()
            }
        };

        Self {
            state: RwLock::new(subscription),
            storage,
        }
    }

    pub async fn current(&self) -> Subscription {
        self.state.read().await.clone()
    }

    pub async fn is_premium(&self) -> bool {
        self.state.read().await.is_premium()
    }

    /// Switch tiers and persist the new record. The in-memory switch is
    /// applied first; a persistence failure is logged, not surfaced.
    pub async fn set_tier(&self, tier: PlanTier, renews_at: Option<DateTime<Utc>>) {
        let subscription = Subscription { tier, renews_at };
        *self.state.write().await = subscription.clone();

        match serde_json::to_string(&subscription) {
            Ok(payload) => {
                if let Err(e) = self.storage.set(keys::SUBSCRIPTION, &payload).await {
                    tracing::warn!(error = %e, "failed to persist subscription");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize subscription"),
        }
    }
}
