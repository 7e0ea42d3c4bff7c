//! # Resource Store
//!
//! The generic collection-plus-status pattern every domain store is built on.
//! A store owns one ordered collection of records, a four-valued load status,
//! and an optional selection, and exposes fetch/insert/update/delete/select
//! with a "errors become state, never panics or rejections" contract.

pub mod collection;
pub mod progress;
pub mod resource;
pub mod status;

pub use collection::Collection;
pub use progress::ProgressSet;
pub use resource::{FetchSource, ResourceStore};
pub use status::LoadStatus;

use chrono::{DateTime, Utc};

/// A record that can live in a [`Collection`].
///
/// Identifiers are strings, unique within one collection, and stable for the
/// record's lifetime.
pub trait Record: Clone + Send + Sync + 'static {
    /// The record's unique identifier.
    fn id(&self) -> &str;

    /// Refresh the record's `updated_at` timestamp, if it has one.
    ///
    /// Called by the store after every in-place update. Records without an
    /// update timestamp keep the default no-op.
    fn touch(&mut self, _now: DateTime<Utc>) {}
}
