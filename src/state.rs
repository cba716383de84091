//! Shared application state
//!
//! The axum handlers share one `PromptConsole`; the console owns the
//! orchestration state and is the only thing that mutates it.

use crate::config::Config;
use crate::console::generation::ResponseFetcher;
use crate::console::PromptConsole;
use std::time::Duration;

/// State shared across all request handlers
///
/// `PromptConsole` clones share one console, so this is cheap to clone per
/// request the way axum expects.
#[derive(Clone)]
pub struct AppState {
    /// The prompt orchestrator
    pub console: PromptConsole,
    /// Maximum accepted prompt length for the run endpoint
    pub max_prompt_length: usize,
}

impl AppState {
    /// Build application state from configuration
    ///
    /// Fails only if the HTTP client cannot be constructed; a missing
    /// generation endpoint or credential is a normal configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generation.timeout_secs))
            .build()?;

        let fetcher = ResponseFetcher::new(
            client,
            config.generation.endpoint.clone(),
            config.generation.api_key.clone(),
        );

        let console = PromptConsole::new(fetcher).with_timing(config.console.timing());

        Ok(Self {
            console,
            max_prompt_length: config.console.max_prompt_length,
        })
    }
}
