//! # Persistence Adapter
//!
//! Durable key-value storage behind a small async port. Stores persist only a
//! whitelisted slice of their state (completed-id sets, the subscription
//! record) under namespaced string keys; item definitions are never persisted,
//! only re-fetched.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use async_trait::async_trait;

/// Storage keys used by the stores. Namespaced so the app's own entries never
/// collide with anything else sharing the platform store.
pub mod keys {
    /// Completed fundraising-checklist item ids.
    pub const CHECKLIST: &str = "cofoundry.checklist";
    /// Completed milestone ids.
    pub const MILESTONES: &str = "cofoundry.milestones";
    /// The current subscription record.
    pub const SUBSCRIPTION: &str = "cofoundry.subscription";
}

/// The contract this layer requires of durable storage: string-keyed get/set,
/// values are serialized JSON fragments.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
