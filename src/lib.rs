//! Banglish → Bengali phonetic transliteration.
//!
//! The heart of this crate is [`translit`], a deterministic, side-effect-free
//! engine that converts Latin-script Bengali ("Banglish") into Bengali
//! Unicode script using fixed grapheme tables, a greedy longest-match
//! scanner, and context-sensitive vowel placement.  Around it sit:
//!
//! * [`realtime`] — a debounced invocation wrapper ("last keystroke wins").
//! * [`llm`] — the upstream correction collaborator: an OpenAI-compatible
//!   client with API-key rotation and a fallback provider, which refines the
//!   engine's output when available and is substituted by it when not.
//! * [`config`] — TOML settings and platform paths.
//!
//! # Quick start
//!
//! ```rust
//! use banglish::translit::convert;
//!
//! assert_eq!(convert("ami bhalo achi"), "আমি ভালো আছি");
//! assert_eq!(convert("tumi kothay?"), "তুমি কোথায়?");
//! ```

pub mod config;
pub mod llm;
pub mod realtime;
pub mod translit;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use realtime::Debouncer;
pub use translit::{convert, convert_word};
