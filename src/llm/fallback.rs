//! Fallback corrector — a primary provider, an optional secondary provider,
//! and the identity as the last resort.
//!
//! When the primary LLM call fails for any reason (`Request`, `Timeout`,
//! `Rejected` after exhausting every key, `Parse`, `EmptyResponse`) the
//! [`FallbackCorrector`] tries the secondary provider, and when that fails
//! too it returns the draft unchanged.  The draft is the transliteration
//! engine's own output, which the system treats as a legitimate substitute
//! for the refined text — so the editor keeps working with no LLM reachable
//! at all.

use async_trait::async_trait;

use crate::llm::corrector::{LlmCorrector, LlmError};

// ---------------------------------------------------------------------------
// FallbackCorrector
// ---------------------------------------------------------------------------

/// Wraps a primary (and optionally a secondary) [`LlmCorrector`] and never
/// returns an error — on total failure it returns `draft` unchanged.
///
/// # Example
/// ```rust
/// use banglish::llm::{ApiCorrector, FallbackCorrector};
/// use banglish::config::ProviderConfig;
///
/// let primary = ApiCorrector::from_config(&ProviderConfig::default());
/// let corrector = FallbackCorrector::new(primary);
/// // `corrector` now implements LlmCorrector and is safe to use even when
/// // no LLM backend is reachable.
/// ```
pub struct FallbackCorrector {
    primary: Box<dyn LlmCorrector>,
    secondary: Option<Box<dyn LlmCorrector>>,
}

impl FallbackCorrector {
    /// Wrap `primary` with fallback-to-identity behaviour.
    pub fn new(primary: impl LlmCorrector + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: None,
        }
    }

    /// Wrap `primary` with a `secondary` provider tried before giving up.
    pub fn with_secondary(
        primary: impl LlmCorrector + 'static,
        secondary: impl LlmCorrector + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: Some(Box::new(secondary)),
        }
    }

    /// Returns `true` when a secondary provider is configured.
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}

#[async_trait]
impl LlmCorrector for FallbackCorrector {
    /// Try the primary provider, then the secondary, then return `draft`
    /// unchanged.
    ///
    /// This implementation **never** returns `Err(_)`.
    async fn correct(&self, draft: &str, context: Option<&str>) -> Result<String, LlmError> {
        match self.primary.correct(draft, context).await {
            Ok(corrected) => return Ok(corrected),
            Err(err) => {
                log::warn!("primary LLM provider failed ({err}); trying fallback");
            }
        }

        if let Some(secondary) = &self.secondary {
            match secondary.correct(draft, context).await {
                Ok(corrected) => return Ok(corrected),
                Err(err) => {
                    log::warn!("fallback LLM provider failed ({err}); keeping draft");
                }
            }
        }

        Ok(draft.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
