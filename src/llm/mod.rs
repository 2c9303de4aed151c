//! Upstream LLM correction collaborator.
//!
//! The transliteration engine is deterministic and rule-bound; this module
//! is the thin request wrapper that hands its output to a large-language
//! model for orthographic refinement.  It provides:
//!
//! * [`LlmCorrector`] — async trait implemented by all corrector backends.
//! * [`ApiCorrector`] — OpenAI-compatible REST client with API-key rotation.
//! * [`FallbackCorrector`] — primary → secondary provider → identity chain;
//!   never fails, because the engine's own output is a legitimate substitute.
//! * [`PromptBuilder`] — Bengali refinement prompts (flat and chat form).
//! * [`LlmError`] — error variants for LLM operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use banglish::config::AppConfig;
//! use banglish::llm::{ApiCorrector, FallbackCorrector, LlmCorrector};
//! use banglish::translit::convert;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!
//!     // Build a corrector that never fails (falls back to the draft).
//!     let corrector = FallbackCorrector::new(ApiCorrector::from_config(&config.llm.primary));
//!
//!     let draft = convert("ami bhalo achi");
//!     let refined = corrector.correct(&draft, None).await.unwrap();
//!     println!("{}", refined);
//! }
//! ```

pub mod corrector;
pub mod fallback;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{ApiCorrector, LlmCorrector, LlmError};
pub use fallback::FallbackCorrector;
pub use prompt::PromptBuilder;
