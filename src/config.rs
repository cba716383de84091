//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. A missing generation endpoint or credential is a
//! normal configuration: the console then answers every prompt from the
//! local fallback engine.

use std::env;
use std::time::Duration;

use crate::console::ConsoleTiming;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Generation endpoint configuration
    pub generation: GenerationConfig,
    /// Console animation configuration
    pub console: ConsoleConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Generation endpoint configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Full URL of the text-generation endpoint, if configured
    pub endpoint: Option<String>,
    /// Bearer credential for the endpoint, if configured
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Console animation configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Delay before each scripted log entry, in milliseconds
    pub step_delay_ms: u64,
    /// Delay before the final response entry, in milliseconds
    pub finalize_delay_ms: u64,
    /// Maximum accepted prompt length in characters
    pub max_prompt_length: usize,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            generation: GenerationConfig {
                endpoint: env::var("GENERATION_ENDPOINT").ok().filter(|s| !s.is_empty()),
                api_key: env::var("GENERATION_API_KEY").ok().filter(|s| !s.is_empty()),
                timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
            console: ConsoleConfig {
                step_delay_ms: env::var("CONSOLE_STEP_DELAY_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(800),
                finalize_delay_ms: env::var("CONSOLE_FINALIZE_DELAY_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(600),
                max_prompt_length: env::var("CONSOLE_MAX_PROMPT_LENGTH")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(10000),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ConsoleConfig {
    /// Convert to the orchestrator's timing struct
    pub fn timing(&self) -> ConsoleTiming {
        ConsoleTiming {
            step_delay: Duration::from_millis(self.step_delay_ms),
            finalize_delay: Duration::from_millis(self.finalize_delay_ms),
        }
    }
}
