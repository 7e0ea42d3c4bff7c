//! # Collection State
//!
//! The plain data half of a resource store: an ordered record list, the load
//! status of its last fetch, the error detail when that fetch failed, and an
//! optional selected record id. All mutators preserve two invariants: at most
//! one record per id, and `selection` always references a present id or is
//! `None`.

use chrono::{DateTime, Utc};

use super::{LoadStatus, Record};

/// One named collection of records plus its lifecycle state.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
    status: LoadStatus,
    error_detail: Option<String>,
    selection: Option<String>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
            error_detail: None,
            selection: None,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mark a fetch in flight. Clears any stale error detail so a retry
    /// starts from a clean slate.
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
        self.error_detail = None;
    }

    /// Replace the collection wholesale with a fetched batch.
    ///
    /// Duplicate ids in the batch are dropped after their first occurrence.
    /// A selection that no longer resolves is cleared.
    pub fn finish_ready(&mut self, batch: Vec<T>) {
        let mut items: Vec<T> = Vec::with_capacity(batch.len());
        for record in batch {
            if !items.iter().any(|existing| existing.id() == record.id()) {
                items.push(record);
            }
        }
        self.items = items;
        self.status = LoadStatus::Ready;
        self.error_detail = None;
        self.revalidate_selection();
    }

    /// Record a failed fetch. Prior items are deliberately left in place so
    /// stale-but-available data stays visible under the error indicator.
    pub fn finish_failed(&mut self, detail: impl Into<String>) {
        self.status = LoadStatus::Failed;
        self.error_detail = Some(detail.into());
    }

    /// Prepend a record (newest-first ordering). Any existing record with the
    /// same id is replaced rather than duplicated.
    pub fn insert_front(&mut self, record: T) {
        self.items.retain(|existing| existing.id() != record.id());
        self.items.insert(0, record);
    }

    /// Apply `apply` to the record matching `id` and refresh its update
    /// timestamp. Returns `false` (a silent no-op) when the id is absent, so
    /// detail screens holding a stale reference never error.
    pub fn update_with(&mut self, id: &str, now: DateTime<Utc>, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(record) => {
                apply(record);
                record.touch(now);
                true
            }
            None => false,
        }
    }

    /// Remove the record matching `id`, if present. Clears the selection when
    /// it pointed at the removed record.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed && self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        removed
    }

    /// Set the selection to `id` when it resolves to a present record,
    /// otherwise clear it.
    pub fn select(&mut self, id: &str) {
        self.selection = self.get(id).map(|record| record.id().to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn revalidate_selection(&mut self) {
        if let Some(selected) = self.selection.as_deref() {
            if !self.items.iter().any(|item| item.id() == selected) {
                self.selection = None;
            }
        }
    }
}
