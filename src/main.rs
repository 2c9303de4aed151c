//! Command-line entry point — Banglish → Bengali.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Read the input text (argv words, or stdin when no args are given).
//! 4. Transliterate with the deterministic engine.
//! 5. If LLM refinement is enabled, create a [`tokio`] runtime, build the
//!    corrector chain ([`ApiCorrector`] primary + optional fallback
//!    provider, wrapped in [`FallbackCorrector`]), and hand the draft over.
//!    Any failure degrades to the engine's own output.
//! 6. Print the result to stdout.

use std::io::Read;

use anyhow::Result;
use banglish::{
    config::AppConfig,
    llm::{ApiCorrector, FallbackCorrector, LlmCorrector},
    translit,
};

/// Build the corrector chain from config: primary provider, optional
/// secondary provider, identity as the last resort.
fn build_corrector(config: &AppConfig) -> FallbackCorrector {
    let primary = ApiCorrector::from_config(&config.llm.primary);
    match &config.llm.fallback {
        Some(fb) => FallbackCorrector::with_secondary(primary, ApiCorrector::from_config(fb)),
        None => FallbackCorrector::new(primary),
    }
}

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("banglish starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Input: argv words joined by spaces, or all of stdin
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.join(" ")
    };

    // 4. Deterministic transliteration — never fails
    let draft = translit::convert(&input);

    // 5. Optional LLM refinement
    let output = if config.llm.enabled {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let corrector = build_corrector(&config);
        match rt.block_on(corrector.correct(&draft, None)) {
            Ok(refined) => refined,
            Err(e) => {
                log::warn!("LLM refinement failed ({e}); keeping the draft");
                draft
            }
        }
    } else {
        draft
    };

    // 6. Output
    println!("{output}");
    Ok(())
}
