//! Client for the OpenRouter chat-completions endpoint.
//!
//! The generation service is opaque beyond this contract: a system/user
//! prompt pair and temperature go in, generated text or a classified error
//! comes out. Each call is deadline-bounded and never retried.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::deadline::with_deadline;
use crate::prompt::Prompt;
use crate::{ReferentError, Result, UpstreamKind};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// OpenRouter API key.
    pub api_key: String,
    /// Public application URL, sent as the `HTTP-Referer` header.
    pub app_url: String,
    /// Model identifier.
    pub model: String,
    /// Completion endpoint base URL.
    pub base_url: String,
    /// Request deadline in seconds.
    pub timeout: u64,
}

impl GenerateConfig {
    /// Builds a config with standard endpoint, model, and deadline.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_url: "http://localhost:3000".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
        }
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize, Default)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Default)]
struct Choice {
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

/// Client for the text-generation service.
pub struct Generator {
    client: Client,
    config: GenerateConfig,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("api_key", &"<redacted>")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl Generator {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// [`ReferentError::MissingCredential`] when the API key is blank.
    pub fn new(config: GenerateConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ReferentError::MissingCredential);
        }
        Ok(Self { client: Client::new(), config })
    }

    /// Sends a prompt and returns the generated text.
    ///
    /// Non-2xx replies come back as [`ReferentError::Upstream`] classified by
    /// status; a 2xx reply without generated content is
    /// [`ReferentError::MalformedResponse`].
    pub async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: prompt.system.clone() },
                ChatMessage { role: "user".to_string(), content: prompt.user.clone() },
            ],
            temperature: prompt.temperature,
        };

        let call = async {
            let response = self
                .client
                .post(format!("{}/chat/completions", self.config.base_url))
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .header("HTTP-Referer", &self.config.app_url)
                .header("X-Title", "Referent")
                .json(&request)
                .send()
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, "generation request failed");
                    ReferentError::GenerationFailed
                })?;

            let status = response.status().as_u16();
            if !response.status().is_success() {
                tracing::warn!(status, "generation service returned an error");
                return Err(ReferentError::Upstream { status, kind: UpstreamKind::classify(status) });
            }

            let body: ChatResponse = response.json().await.map_err(|_| ReferentError::MalformedResponse)?;
            reply_text(body)
        };

        with_deadline(Duration::from_secs(self.config.timeout), call)
            .await
            .flatten(self.config.timeout)
    }
}

/// Pulls the generated text out of a parsed reply.
fn reply_text(body: ChatResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ReferentError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(fut)
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(matches!(
            Generator::new(GenerateConfig::new("")),
            Err(ReferentError::MissingCredential)
        ));
        assert!(matches!(
            Generator::new(GenerateConfig::new("   ")),
            Err(ReferentError::MissingCredential)
        ));
        assert!(Generator::new(GenerateConfig::new("sk-test")).is_ok());
    }

    #[test]
    fn test_reply_text_happy_path() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"перевод"}}]}"#).unwrap();
        assert_eq!(reply_text(body).unwrap(), "перевод");
    }

    #[test]
    fn test_reply_text_missing_choices() {
        let body: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(matches!(reply_text(body), Err(ReferentError::MalformedResponse)));
    }

    #[test]
    fn test_reply_text_missing_message_content() {
        let body: ChatResponse = serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert!(matches!(reply_text(body), Err(ReferentError::MalformedResponse)));

        let body: ChatResponse = serde_json::from_str(r#"{"choices":[{}]}"#).unwrap();
        assert!(matches!(reply_text(body), Err(ReferentError::MalformedResponse)));
    }

    #[test]
    fn test_unreachable_service() {
        let mut config = GenerateConfig::new("sk-test");
        config.base_url = "http://127.0.0.1:9".to_string();
        let generator = Generator::new(config).unwrap();

        let prompt = crate::prompt::PromptBuilder::new().translation("hello");
        let result = block_on(generator.complete(&prompt));
        assert!(matches!(
            result,
            Err(ReferentError::GenerationFailed) | Err(ReferentError::Timeout { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let generator = Generator::new(GenerateConfig::new("sk-secret")).unwrap();
        let debug = format!("{:?}", generator);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
