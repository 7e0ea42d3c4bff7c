//! # HTTP Completion Client
//!
//! Talks to the hosted completion endpoint: a single POST with the prompt
//! messages, a JSON response carrying one `completion` string. No auth and no
//! retry, matching the service contract. The client carries a request timeout
//! so an unresponsive endpoint cannot pin a store in `Loading` forever.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CompletionClient, PromptMessage};
use crate::error::StoreError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the fixed text-completion endpoint.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [PromptMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompletionRequest { messages })
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Transport(format!(
                "completion endpoint returned {}",
                status
            )));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

        Ok(body.completion)
    }
}
