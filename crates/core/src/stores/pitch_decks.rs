//! # Pitch Deck Store
//!
//! Decks the founder is assembling. All mutations are local and optimistic;
//! there is no backing document service yet.

use std::sync::Arc;

use chrono::Utc;

use super::mock::MockSource;
use crate::error::StoreError;
use crate::models::{generate_id, PitchDeck, Slide};
use crate::store::{FetchSource, LoadStatus, ResourceStore};

/// Partial update for a deck; unset fields keep their current value.
#[derive(Debug, Default)]
pub struct DeckUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub struct PitchDeckStore {
    inner: ResourceStore<PitchDeck>,
}

impl PitchDeckStore {
    pub fn new(source: Arc<dyn FetchSource<PitchDeck>>) -> Self {
        Self {
            inner: ResourceStore::new("pitch_decks", source),
        }
    }

    /// Decks are created in-app; the default source serves an empty catalog.
    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MockSource::empty()))
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    /// Create a deck with an empty slide list. Title is required; the
    /// description defaults to empty.
    pub async fn create_deck(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<PitchDeck, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("deck title is required".to_string()));
        }

        let now = Utc::now();
        let deck = PitchDeck {
            id: generate_id("deck"),
            title: title.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            slides: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.inner.insert(deck.clone()).await;
        Ok(deck)
    }

    /// Merge a partial update onto a deck. Unknown ids are a silent no-op.
    pub async fn update_deck(&self, id: &str, update: DeckUpdate) {
        self.inner
            .update(id, move |deck| {
                if let Some(title) = update.title {
                    deck.title = title;
                }
                if let Some(description) = update.description {
                    deck.description = description;
                }
            })
            .await;
    }

    /// Append a slide to a deck. Returns the slide even when the deck id is
    /// stale (the update is then dropped, per the no-op policy).
    pub async fn add_slide(&self, deck_id: &str, heading: &str, body: &str) -> Result<Slide, StoreError> {
        let heading = heading.trim();
        if heading.is_empty() {
            return Err(StoreError::Validation(
                "slide heading is required".to_string(),
            ));
        }

        let slide = Slide {
            id: generate_id("slide"),
            heading: heading.to_string(),
            body: body.trim().to_string(),
        };

        {
            let slide = slide.clone();
            self.inner
                .update(deck_id, move |deck| deck.slides.push(slide))
                .await;
        }

        Ok(slide)
    }

    pub async fn delete_deck(&self, id: &str) {
        self.inner.delete(id).await;
    }

    pub async fn select(&self, id: &str) {
        self.inner.select(id).await;
    }

    pub async fn decks(&self) -> Vec<PitchDeck> {
        self.inner.items().await
    }

    pub async fn get(&self, id: &str) -> Option<PitchDeck> {
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
