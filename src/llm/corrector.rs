//! Core `LlmCorrector` trait and `ApiCorrector` implementation.
//!
//! `ApiCorrector` calls any OpenAI-compatible `/v1/chat/completions` endpoint
//! — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.  All
//! connection details come from [`ProviderConfig`]; nothing is hardcoded.
//!
//! The corrector holds the provider's full list of API keys and rotates
//! through them: a request rejected with 401/403/429 advances to the next
//! key and retries, until every key has been tried once.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::llm::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during LLM refinement.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The provider rejected the request's credentials or quota
    /// (HTTP 401 / 403 / 429) — triggers key rotation.
    #[error("provider rejected the request (HTTP {0})")]
    Rejected(u16),

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The LLM returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// LlmCorrector trait
// ---------------------------------------------------------------------------

/// Async trait for LLM-based refinement of transliterated Bengali text.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn LlmCorrector>`).
///
/// # Arguments
/// * `draft`   – Transliterated Bengali draft produced by the engine (or a
///               raw Banglish word — the collaborator accepts either).
/// * `context` – Optional surrounding editor text to disambiguate spellings.
#[async_trait]
pub trait LlmCorrector: Send + Sync {
    async fn correct(&self, draft: &str, context: Option<&str>) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiCorrector
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Works with: Ollama (OpenAI mode), OpenAI, Groq, Together.ai, LM Studio,
/// vLLM — any provider that speaks the OpenAI chat-completions wire format.
///
/// # Key rotation
/// The provider's `api_keys` list is cycled with an atomic cursor.  Each
/// request uses the current key; a [`LlmError::Rejected`] response advances
/// the cursor and retries with the next key.  An empty key list means a
/// single unauthenticated request — correct for Ollama and other local
/// providers.
pub struct ApiCorrector {
    client: reqwest::Client,
    config: ProviderConfig,
    keys: Vec<String>,
    next_key: AtomicUsize,
    prompt_builder: PromptBuilder,
}

impl ApiCorrector {
    /// Build an `ApiCorrector` from a provider config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).  Blank entries in `api_keys` are discarded.
    pub fn from_config(config: &ProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let keys: Vec<String> = config
            .api_keys
            .iter()
            .filter(|k| !k.trim().is_empty())
            .cloned()
            .collect();

        Self {
            client,
            config: config.clone(),
            keys,
            next_key: AtomicUsize::new(0),
            prompt_builder: PromptBuilder::new(),
        }
    }

    /// Number of usable API keys in the rotation.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// One request with one (optional) key.
    async fn send_once(
        &self,
        key: Option<&str>,
        system_msg: &str,
        user_msg: &str,
    ) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  256
        });

        let mut req = self.client.post(&url).json(&body);
        if let Some(key) = key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let status = response.status().as_u16();
        if matches!(status, 401 | 403 | 429) {
            return Err(LlmError::Rejected(status));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let corrected = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LlmError::EmptyResponse)?
            .trim()
            .to_string();

        if corrected.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(corrected)
    }
}

#[async_trait]
impl LlmCorrector for ApiCorrector {
    /// Send `draft` to the configured endpoint for refinement, rotating
    /// through the key list on credential/quota rejections.
    async fn correct(&self, draft: &str, context: Option<&str>) -> Result<String, LlmError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(draft, context);

        if self.keys.is_empty() {
            // Local providers (Ollama etc.) need no Authorization header.
            return self.send_once(None, &system_msg, &user_msg).await;
        }

        let mut last_rejection = None;
        for _ in 0..self.keys.len() {
            let idx = self.next_key.load(Ordering::Relaxed) % self.keys.len();
            match self
                .send_once(Some(&self.keys[idx]), &system_msg, &user_msg)
                .await
            {
                Err(err @ LlmError::Rejected(_)) => {
                    log::warn!("API key #{idx} rejected ({err}); rotating to the next key");
                    self.next_key
                        .store((idx + 1) % self.keys.len(), Ordering::Relaxed);
                    last_rejection = Some(err);
                }
                other => return other,
            }
        }

        Err(last_rejection.unwrap_or(LlmError::EmptyResponse))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    fn make_config(api_keys: &[&str]) -> ProviderConfig {
        ProviderConfig {
            base_url: "http://localhost:11434".into(),
            api_keys: api_keys.iter().map(|s| s.to_string()).collect(),
            model: "qwen2.5:3b".into(),
            temperature: 0.3,
            timeout_secs: 10,
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(&[]);
        let _corrector = ApiCorrector::from_config(&config);
    }

    #[test]
    fn blank_keys_are_discarded() {
        let config = make_config(&["", "  ", "sk-real-key"]);
        let corrector = ApiCorrector::from_config(&config);
        assert_eq!(corrector.key_count(), 1);
    }

    #[test]
    fn key_list_order_is_preserved() {
        let config = make_config(&["sk-first", "sk-second", "sk-third"]);
        let corrector = ApiCorrector::from_config(&config);
        assert_eq!(corrector.keys, vec!["sk-first", "sk-second", "sk-third"]);
    }

    /// Verify that `ApiCorrector` is object-safe (usable as `dyn LlmCorrector`).
    #[test]
    fn corrector_is_object_safe() {
        let config = make_config(&[]);
        let corrector: Box<dyn LlmCorrector> = Box::new(ApiCorrector::from_config(&config));
        drop(corrector);
    }

    #[test]
    fn rejected_error_carries_the_status() {
        let err = LlmError::Rejected(429);
        assert!(err.to_string().contains("429"));
    }
}
