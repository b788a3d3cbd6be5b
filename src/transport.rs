use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::LlmConfig;
use crate::error::{Result, SummarizerError};
use crate::models::{ChatRequest, ChatResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse>;
}

/// Chat completions over any OpenAI-compatible HTTP API
pub struct OpenAiTransport {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiTransport {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        Self::new(
            cfg.api_key.clone(),
            &cfg.base_url,
            Duration::from_secs(cfg.timeout_seconds),
        )
    }
}

#[async_trait]
impl Transport for OpenAiTransport {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
        let start_time = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(req)
            .send()
            .await
            .map_err(|e| {
                SummarizerError::Upstream(format!("Failed to send request to model API: {e}"))
            })?;

        let status = response.status();
        tracing::debug!(
            %status,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            model = %req.model,
            "Model API responded"
        );

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::Upstream(format!(
                "Model API error ({status}): {body}"
            )));
        }

        response.json().await.map_err(|e| {
            SummarizerError::Upstream(format!("Failed to parse model API response: {e}"))
        })
    }
}
