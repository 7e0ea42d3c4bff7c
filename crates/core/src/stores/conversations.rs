//! # Conversation Store
//!
//! Matchmaking message threads: the conversation list screen reads the
//! collection, the thread screen follows the selection.

use std::sync::Arc;

use chrono::Utc;

use super::mock::{seed_conversations, MockSource, DEFAULT_LATENCY};
use crate::error::StoreError;
use crate::models::{generate_id, ChatMessage, Conversation, Sender};
use crate::store::{FetchSource, LoadStatus, ResourceStore};

pub struct ConversationStore {
    inner: ResourceStore<Conversation>,
}

impl ConversationStore {
    pub fn new(source: Arc<dyn FetchSource<Conversation>>) -> Self {
        Self {
            inner: ResourceStore::new("conversations", source),
        }
    }

    /// Store backed by the seeded conversation catalog.
    pub fn with_seed_data() -> Self {
        Self::new(Arc::new(MockSource::new(
            seed_conversations(),
            DEFAULT_LATENCY,
        )))
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    /// Start a new thread with a matched candidate. The counterpart name is
    /// the one caller-required field.
    pub async fn create_conversation(
        &self,
        counterpart_name: &str,
        counterpart_role: Option<&str>,
    ) -> Result<Conversation, StoreError> {
        let name = counterpart_name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "counterpart name is required".to_string(),
            ));
        }

        let now = Utc::now();
        let conversation = Conversation {
            id: generate_id("conv"),
            counterpart_name: name.to_string(),
            counterpart_role: counterpart_role
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string),
            preview: String::new(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.inner.insert(conversation.clone()).await;
        Ok(conversation)
    }

    /// Append an outbound message to a thread and refresh its preview. A
    /// stale conversation id is tolerated: the message is dropped silently,
    /// matching the store layer's no-op update policy.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        body: &str,
    ) -> Result<ChatMessage, StoreError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(StoreError::Validation(
                "message body is required".to_string(),
            ));
        }

        let message = ChatMessage {
            id: generate_id("msg"),
            sender: Sender::Me,
            body: body.to_string(),
            sent_at: Utc::now(),
        };

        let appended = {
            let message = message.clone();
            self.inner
                .update(conversation_id, move |conversation| {
                    conversation.preview = message.body.clone();
                    conversation.messages.push(message);
                })
                .await
        };
        if !appended {
            tracing::debug!(conversation_id, "message sent to unknown conversation, dropped");
        }

        Ok(message)
    }

    pub async fn delete_conversation(&self, id: &str) {
        self.inner.delete(id).await;
    }

    pub async fn select(&self, id: &str) {
        self.inner.select(id).await;
    }

    pub async fn conversations(&self) -> Vec<Conversation> {
        self.inner.items().await
    }

    pub async fn get(&self, id: &str) -> Option<Conversation> {
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
    use std::time::Duration;

    fn seeded_store() -> ConversationStore {
        ConversationStore::new(Arc::new(MockSource::new(
            seed_conversations(),
            Duration::ZERO,
        )))
    }

    #[tokio::test]
    async fn test_create_requires_counterpart_name() {
        let store = seeded_store();
        let err = store.create_conversation("   ", None).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_prepends_new_thread() {
        let store = seeded_store();
        store.fetch().await;
        let before = store.conversations().await.len();

        let created = store
            .create_conversation("Ana Soto", Some("Designer"))
            .await
            .unwrap();

        let conversations = store.conversations().await;
        assert_eq!(conversations.len(), before + 1);
        assert_eq!(conversations[0].id, created.id);
        assert_eq!(conversations[0].counterpart_role.as_deref(), Some("Designer"));
    }

    #[tokio::test]
    async fn test_send_message_appends_and_updates_preview() {
        let store = seeded_store();
        store.fetch().await;

        let message = store.send_message("conv-2", "Let's talk Friday.").await.unwrap();

        let conversation = store.get("conv-2").await.unwrap();
        assert_eq!(conversation.preview, "Let's talk Friday.");
        assert_eq!(conversation.messages.last().unwrap().id, message.id);
        assert_eq!(conversation.messages.last().unwrap().sender, Sender::Me);
    }

    #[tokio::test]
    async fn test_send_message_to_unknown_thread_is_tolerated() {
        let store = seeded_store();
        store.fetch().await;
        let before = store.conversations().await;

        store.send_message("conv-gone", "anyone there?").await.unwrap();

        let after = store.conversations().await;
        assert_eq!(before.len(), after.len());
        assert!(after.iter().all(|c| c.preview != "anyone there?"));
    }

    #[tokio::test]
    async fn test_delete_selected_thread_clears_selection() {
        let store = seeded_store();
        store.fetch().await;
        store.select("conv-1").await;

        store.delete_conversation("conv-1").await;
        assert_eq!(store.selection().await, None);
    }
}
