//! # Idea Validation Store
//!
//! Scored AI assessments of startup ideas. The completion is expected to
//! carry a JSON object; a malformed body substitutes the documented fallback
//! (score 65) so the user always gets a result. An unreachable service is the
//! one case surfaced as `Failed` status, with a friendly message.

use std::sync::Arc;

use chrono::Utc;

use super::mock::MockSource;
use crate::completion::{extract_json, CompletionClient, PromptMessage};
use crate::error::StoreError;
use crate::models::{generate_id, IdeaValidation};
use crate::store::{LoadStatus, ResourceStore};

/// Score substituted when the completion does not carry parseable JSON.
pub const FALLBACK_SCORE: u8 = 65;
const FALLBACK_VERDICT: &str =
    "Shows promise. Sharpen your differentiation and validate demand with real users.";
const UNREACHABLE_DETAIL: &str = "We couldn't score your idea right now. Please try again.";

const SYSTEM_PROMPT: &str = "You are a startup analyst. Assess the founder's idea and reply with \
     a single JSON object: {\"score\": <0-100>, \"verdict\": \"...\", \
     \"strengths\": [\"...\"], \"risks\": [\"...\"]}";

pub struct ValidationStore {
    inner: ResourceStore<IdeaValidation>,
    completion: Arc<dyn CompletionClient>,
}

impl ValidationStore {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        // Validation records are only ever created locally; the fetch source
        // exists to give the store the standard lifecycle shape.
        Self {
            inner: ResourceStore::new("validations", Arc::new(MockSource::empty())),
            completion,
        }
    }

    pub async fn fetch(&self) {
        self.inner.fetch().await;
    }

    /// Score an idea. Appends exactly one record per successful call - even
    /// when the completion is malformed, in which case the fallback record is
    /// appended instead. Returns `Ok(None)` when the service was unreachable
    /// (recorded as `Failed` status) or a validation is already in flight.
    pub async fn validate(&self, idea: &str) -> Result<Option<IdeaValidation>, StoreError> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(StoreError::Validation("idea text is required".to_string()));
        }

        if !self.inner.mark_loading().await {
            return Ok(None);
        }

        let messages = [
            PromptMessage::system(SYSTEM_PROMPT),
            PromptMessage::user(idea.to_string()),
        ];

        match self.completion.complete(&messages).await {
            Ok(text) => {
                let record = parse_validation(idea, &text);
                self.inner.insert(record.clone()).await;
                self.inner.mark_ready().await;
                Ok(Some(record))
            }
            Err(e) => {
                tracing::warn!(error = %e, "idea validation call failed");
                self.inner.mark_failed(UNREACHABLE_DETAIL).await;
                Ok(None)
            }
        }
    }

    pub async fn validations(&self) -> Vec<IdeaValidation> {
        self.inner.items().await
    }

    pub async fn status(&self) -> LoadStatus {
        self.inner.status().await
    }

    pub async fn error_detail(&self) -> Option<String> {
        self.inner.error_detail().await
    }
}

/// Build a validation record from a completion body, substituting the
/// documented fallback for anything unparseable. Field-level tolerance: a
/// JSON object missing `score` still gets the fallback score.
fn parse_validation(idea: &str, completion: &str) -> IdeaValidation {
    let parsed = extract_json(completion);
    if parsed.is_none() {
        tracing::warn!("validation completion carried no JSON, using fallback score");
    }
    let value = parsed.unwrap_or_default();

    let score = value
        .get("score")
        .and_then(|s| s.as_u64())
        .map(|s| s.min(100) as u8)
        .unwrap_or(FALLBACK_SCORE);
    let verdict = value
        .get("verdict")
        .and_then(|v| v.as_str())
        .unwrap_or(FALLBACK_VERDICT)
        .to_string();

    IdeaValidation {
        id: generate_id("val"),
        idea: idea.to_string(),
        score,
        verdict,
        strengths: string_list(&value, "strengths"),
        risks: string_list(&value, "risks"),
        created_at: Utc::now(),
    }
}

fn string_list(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedClient(Result<String, String>);

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, _messages: &[PromptMessage]) -> Result<String, StoreError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(StoreError::Transport(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_well_formed_completion_is_parsed() {
        let client = Arc::new(CannedClient(Ok(r#"
            {"score": 88, "verdict": "strong wedge",
             "strengths": ["clear ICP"], "risks": ["crowded market"]}
        "#
        .to_string())));
        let store = ValidationStore::new(client);

        let record = store.validate("A marketplace for lab space").await.unwrap().unwrap();
        assert_eq!(record.score, 88);
        assert_eq!(record.verdict, "strong wedge");
        assert_eq!(record.strengths, vec!["clear ICP".to_string()]);
        assert_eq!(store.status().await, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn test_malformed_completion_appends_fallback_record() {
        let client = Arc::new(CannedClient(Ok(
            "Honestly this sounds pretty good to me!".to_string()
        )));
        let store = ValidationStore::new(client);

        let record = store.validate("An app for plant care").await.unwrap().unwrap();

        let history = store.validations().await;
        assert_eq!(history.len(), 1);
        assert_eq!(record.score, FALLBACK_SCORE);
        assert_eq!(store.status().await, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn test_unreachable_service_sets_failed_status_no_record() {
        let client = Arc::new(CannedClient(Err("connection reset".to_string())));
        let store = ValidationStore::new(client);

        let outcome = store.validate("An app for plant care").await.unwrap();

        assert!(outcome.is_none());
        assert!(store.validations().await.is_empty());
        assert_eq!(store.status().await, LoadStatus::Failed);
        assert!(store.error_detail().await.unwrap().contains("try again"));
    }

    #[tokio::test]
    async fn test_empty_idea_is_a_validation_error() {
        let client = Arc::new(CannedClient(Ok("{}".to_string())));
        let store = ValidationStore::new(client);

        let err = store.validate("   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_parse_clamps_out_of_range_scores() {
        let record = parse_validation("idea", r#"{"score": 400}"#);
        assert_eq!(record.score, 100);
    }
}
