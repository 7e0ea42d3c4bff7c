//! # CoFoundry Core
//!
//! Client-side state layer for the CoFoundry app: the collection of stores
//! behind the screens (conversations, pitch decks, business plans,
//! milestones, fundraising checklist, investors, legal templates, circles,
//! idea validations, subscription), plus the persistence adapter and the
//! completion client they share.
//!
//! ## Architecture
//!
//! - `store/` - the generic resource-store pattern (collection + status +
//!   selection, persisted progress sets)
//! - `stores/` - one instantiation per domain collection
//! - `storage/` - durable key-value adapters (in-memory, SQLite)
//! - `completion/` - the hosted text-completion client
//! - `services` - all stores constructed once and shared by handle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cofoundry_core::{AppServices, HttpCompletionClient, SqliteStorage};
//!
//! let storage = Arc::new(SqliteStorage::open("cofoundry.db")?);
//! let completion = Arc::new(HttpCompletionClient::new("https://api.example.com/complete")?);
//! let services = AppServices::new(storage, completion).await;
//!
//! services.checklist.fetch().await;
//! let pct = services.checklist.completion_percentage().await;
//! ```

pub mod completion;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod stores;

pub use completion::{CompletionClient, HttpCompletionClient, PromptMessage, Role};
pub use error::StoreError;
pub use services::AppServices;
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
pub use store::{Collection, FetchSource, LoadStatus, ProgressSet, Record, ResourceStore};
