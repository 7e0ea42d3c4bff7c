//! # Completion Client
//!
//! Port for the hosted text-completion service that synthesizes content
//! (pitch tips, idea scores, document drafts) from role-tagged prompts.
//! Consumers treat the service as slow, occasionally malformed, and
//! occasionally unreachable - the stores own the fallbacks.

pub mod http;

pub use http::HttpCompletionClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Role tag for one prompt segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One ordered segment of a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The text-generation collaborator: ordered prompt in, single completion out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, StoreError>;
}

/// Pull a JSON object out of a completion that may wrap it in prose.
///
/// Tries the whole string first, then the outermost `{...}` span. Returns
/// `None` when no parseable object exists; callers substitute their
/// documented fallback instead of surfacing the parse failure.
pub fn extract_json(completion: &str) -> Option<serde_json::Value> {
    let trimmed = completion.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if value.is_object() {
            return Some(value);
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&trimmed[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_parses_bare_object() {
        let value = extract_json(r#"{"score": 82}"#).unwrap();
        assert_eq!(value["score"], 82);
    }

    #[test]
    fn test_extract_json_parses_object_wrapped_in_prose() {
        let completion = "Here is my assessment:\n{\"score\": 71, \"verdict\": \"solid\"}\nGood luck!";
        let value = extract_json(completion).unwrap();
        assert_eq!(value["score"], 71);
        assert_eq!(value["verdict"], "solid");
    }

    #[test]
    fn test_extract_json_rejects_plain_text() {
        assert!(extract_json("I would rate this idea quite highly.").is_none());
        assert!(extract_json("").is_none());
    }

    #[test]
    fn test_prompt_message_roles_serialize_lowercase() {
        let msg = PromptMessage::system("be terse");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be terse");
    }
}
