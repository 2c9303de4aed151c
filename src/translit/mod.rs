//! Deterministic Banglish → Bengali phonetic transliteration.
//!
//! This module provides:
//! * [`convert`] — whole-text entry point (dictionary stage + character engine).
//! * [`convert_word`] — single-token entry point (character engine only).
//! * [`tables::Tables`] / [`tables::tables`] — the immutable grapheme tables.
//!
//! The engine is side-effect-free and never fails: unmapped input passes
//! through verbatim.  The tables are built and validated once per process;
//! concurrent calls from any number of threads need no synchronisation.

pub mod engine;
pub mod tables;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use engine::{convert, convert_word};
pub use tables::{tables, Tables};
