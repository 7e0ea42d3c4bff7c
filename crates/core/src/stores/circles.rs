//! # Circle Store
//!
//! Founder peer groups. Joining is an optimistic in-place flip with no
//! rollback path, matching the rest of the mutation layer.

use std::sync::Arc;

use super::mock::{seed_circles, MockSource, DEFAULT_LATENCY};
use crate::models::Circle;
use crate::store::{FetchSource, LoadStatus, ResourceStore};

pub struct CircleStore {
    inner: ResourceStore<Circle>,
}

impl CircleStore {
    pub fn new(source: Arc<dyn FetchSource<Circle>>) -> Self {
        Self {
            inner: ResourceStore::new("circles", source),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MockSource::new(seed_circles(), DEFAULT_LATENCY)))
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    /// Join or leave a circle, adjusting the member count with the flip.
    /// Unknown ids are a silent no-op.
    pub async fn toggle_membership(&self, id: &str) {
        self.inner
            .update(id, |circle| {
                circle.joined = !circle.joined;
                circle.member_count = if circle.joined {
                    circle.member_count.saturating_add(1)
                } else {
                    circle.member_count.saturating_sub(1)
                };
            })
            .await;
    }

    pub async fn circles(&self) -> Vec<Circle> {
        self.inner.items().await
    }

    pub async fn joined_circles(&self) -> Vec<Circle> {
        self.inner
            .items()
            .await
            .into_iter()
            .filter(|circle| circle.joined)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Circle> {
        self.inner.get(id).await
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
    use std::time::Duration;

    async fn seeded_store() -> CircleStore {
        let store = CircleStore::new(Arc::new(MockSource::new(seed_circles(), Duration::ZERO)));
        store.fetch().await;
        store
    }

    #[tokio::test]
    async fn test_toggle_membership_flips_and_counts() {
        let store = seeded_store().await;
        let before = store.get("circle-1").await.unwrap();
        assert!(!before.joined);

        store.toggle_membership("circle-1").await;
        let joined = store.get("circle-1").await.unwrap();
        assert!(joined.joined);
        assert_eq!(joined.member_count, before.member_count + 1);

        store.toggle_membership("circle-1").await;
        let left = store.get("circle-1").await.unwrap();
        assert!(!left.joined);
        assert_eq!(left.member_count, before.member_count);
    }

    #[tokio::test]
    async fn test_toggle_unknown_circle_is_noop() {
        let store = seeded_store().await;
        let before = store.circles().await.len();

        store.toggle_membership("circle-404").await;
        assert_eq!(store.circles().await.len(), before);
    }

    #[tokio::test]
    async fn test_joined_circles_reflects_seed_and_flips() {
        let store = seeded_store().await;
        assert_eq!(store.joined_circles().await.len(), 1);

        store.toggle_membership("circle-2").await;
        assert_eq!(store.joined_circles().await.len(), 2);
    }
}
