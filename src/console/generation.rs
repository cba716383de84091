//! Remote response generation client
//!
//! Direct HTTP client for the text-generation endpoint backing the console.
//! The contract is total: `ResponseFetcher::fetch` always produces a string.
//! Every failure mode (missing endpoint, network error, non-success status,
//! missing or empty `text` field) is absorbed here and answered with a
//! locally synthesized fallback; nothing propagates to the orchestrator.

use crate::console::fallback::FallbackGenerator;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// System instruction sent with every generation request
pub const SYSTEM_INSTRUCTION: &str = "You are an Engineering Assistant Audit Tool. \
Respond with a single-line technical brief (no line breaks). \
Provide 3 compact implementation steps (use \"1) 2) 3)\"). \
Tone: professional, technical, optimized. \
Context: you are responding in a development console on a software engineer's digital resume. \
Keep it concise (under 70 words). \
Highlight best practices, efficiency, and clean code.";

/// Why a generation attempt did not yield usable text
///
/// Internal to this module's fetch path; callers of `fetch` never see it.
#[derive(Error, Debug)]
enum GenerationError {
    /// No endpoint configured (normal when running without credentials)
    #[error("generation endpoint not configured")]
    NotConfigured,

    /// The HTTP request itself failed
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("generation endpoint returned status {0}")]
    Status(u16),

    /// The response body had no usable `text` field
    #[error("generation response missing text")]
    MissingText,
}

/// Request body sent to the generation endpoint
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationRequest<'a> {
    /// The user prompt
    prompt: &'a str,
    /// Fixed system instruction framing the reply
    system_instruction: &'a str,
}

/// Expected success response from the generation endpoint
#[derive(Deserialize, Debug)]
struct GenerationResponse {
    /// Generated reply text
    #[serde(default)]
    text: Option<String>,
}

/// Generation client with built-in fallback
///
/// Cheap to clone; the `reqwest::Client` pools connections and the fallback
/// generator is shared so a pinned seed stays pinned across clones.
#[derive(Clone)]
pub struct ResponseFetcher {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
    fallback: Arc<Mutex<FallbackGenerator>>,
}

impl ResponseFetcher {
    /// Create a fetcher for the given endpoint and optional credential
    ///
    /// `endpoint == None` is a normal configuration (no credentials set up);
    /// every fetch then takes the fallback path.
    pub fn new(client: reqwest::Client, endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            fallback: Arc::new(Mutex::new(FallbackGenerator::new())),
        }
    }

    /// Replace the fallback generator (tests pin the seed through this)
    pub fn with_fallback(mut self, generator: FallbackGenerator) -> Self {
        self.fallback = Arc::new(Mutex::new(generator));
        self
    }

    /// Fetch a generated response for the prompt
    ///
    /// Total function: returns remote text (trimmed) on success, a local
    /// fallback otherwise. Never errors.
    pub async fn fetch(&self, prompt: &str) -> String {
        match self.try_fetch(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Generation fetch failed, using fallback engine");
                self.fallback_response(prompt)
            }
        }
    }

    /// Synthesize a fallback response directly
    pub fn fallback_response(&self, prompt: &str) -> String {
        match self.fallback.lock() {
            Ok(mut generator) => generator.generate(prompt),
            // A poisoned lock means a panic mid-generate; a fresh generator
            // still satisfies the total-function contract.
            Err(_) => FallbackGenerator::new().generate(prompt),
        }
    }

    async fn try_fetch(&self, prompt: &str) -> Result<String, GenerationError> {
        let endpoint = self.endpoint.as_deref().ok_or(GenerationError::NotConfigured)?;

        let body = GenerationRequest {
            prompt,
            system_instruction: SYSTEM_INSTRUCTION,
        };

        tracing::debug!(
            endpoint = %endpoint,
            prompt_len = prompt.len(),
            "Calling generation endpoint"
        );

        let mut request = self.client.post(endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::warn!(
                status_code = status_code,
                error_body = %error_body,
                "Generation endpoint returned error status"
            );
            return Err(GenerationError::Status(status_code));
        }

        let parsed: GenerationResponse = response.json().await?;
        let text = parsed
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(GenerationError::MissingText)?;

        tracing::debug!(response_len = text.len(), "Received generated response");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serial_test::serial;

    fn fetcher_for(endpoint: Option<String>) -> ResponseFetcher {
        ResponseFetcher::new(reqwest::Client::new(), endpoint, None)
            .with_fallback(FallbackGenerator::with_seed(11))
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_success_trims_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"text": "  A concise brief.  "}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(Some(format!("{}/api/agent", server.url())));
        let result = fetcher.fetch("tune my api").await;

        mock.assert_async().await;
        assert_eq!(result, "A concise brief.");
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_non_success_status_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent")
            .with_status(500)
            .with_body(r#"{"error": "boom"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(Some(format!("{}/api/agent", server.url())));
        let result = fetcher.fetch("tune my api").await;

        mock.assert_async().await;
        assert!(result.contains("\"tune my api\""), "got: {}", result);
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_missing_text_field_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(Some(format!("{}/api/agent", server.url())));
        let result = fetcher.fetch("prompt here").await;

        mock.assert_async().await;
        assert!(result.contains("\"prompt here\""));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_empty_text_field_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent")
            .with_status(200)
            .with_body(r#"{"text": "   "}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(Some(format!("{}/api/agent", server.url())));
        let result = fetcher.fetch("prompt here").await;

        mock.assert_async().await;
        assert!(result.contains("\"prompt here\""));
    }

    #[tokio::test]
    async fn test_fetch_without_endpoint_falls_back() {
        let fetcher = fetcher_for(None);
        let result = fetcher.fetch("no creds").await;
        assert!(result.contains("\"no creds\""));
    }

    #[tokio::test]
    #[serial]
    async fn test_fetch_sends_bearer_credential() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/agent")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(r#"{"text": "ok"}"#)
            .create_async()
            .await;

        let fetcher = ResponseFetcher::new(
            reqwest::Client::new(),
            Some(format!("{}/api/agent", server.url())),
            Some("test-key".to_string()),
        );
        let result = fetcher.fetch("authorized").await;

        mock.assert_async().await;
        assert_eq!(result, "ok");
    }
}
