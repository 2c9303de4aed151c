//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the LLM
//! collaborator and the editor wrapper, `AppPaths` for cross-platform config
//! directories, and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, EditorConfig, LlmConfig, ProviderConfig};
