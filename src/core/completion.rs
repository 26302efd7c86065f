//! Language-model completion boundary.
//!
//! The engine never talks to a model directly. Answer generation goes
//! through [`CompletionProvider`], so the HTTP client can be swapped for
//! a stub in tests or for another backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::config::CompletionConfig;
use crate::core::error::{RagError, Result};

/// One completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// User turn
    pub prompt: String,
    /// System instruction carrying the retrieved context
    pub system_prompt: String,
    /// Model name passed through to the backend
    pub model: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
}

/// Generates text for a prompt
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// Provider for any endpoint speaking the OpenAI chat-completions API
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    max_tokens: u32,
}

impl fmt::Debug for OpenAiCompatibleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleProvider")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiCompatibleProvider {
    /// Build a provider from configuration.
    ///
    /// The API key is read from the environment variable named by
    /// `api_key_env`. A missing key is not an error here; endpoints
    /// that need one will reject the request.
    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RagError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::debug!(
                "{} is not set, completion requests are sent without a key",
                config.api_key_env
            );
        }

        Ok(Self::new(client, api_key, config.base_url.clone(), config.max_tokens))
    }

    pub fn new(
        client: reqwest::Client,
        api_key: Option<String>,
        mut base_url: String,
        max_tokens: u32,
    ) -> Self {
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            api_key,
            base_url,
            max_tokens,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = ChatRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: self.max_tokens,
        };

        let mut builder = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RagError::Completion(format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RagError::Completion(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            tracing::error!("Completion API error {status}: {text}");
            return Err(RagError::Completion(format!(
                "completion request failed (status {status})"
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| RagError::Completion(format!("invalid response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| CompletionResponse { content })
            .ok_or_else(|| RagError::Completion("response contained no choices".to_string()))
    }
}
