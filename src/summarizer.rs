use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::{Result, SummarizerError};
use crate::models::{ChatRequest, SummaryRequest};
use crate::prompt::build_messages;
use crate::transport::Transport;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce the summary text for an already validated request
    async fn summarize(&self, req: &SummaryRequest) -> Result<String>;
}

pub struct LlmSummarizer {
    tx: Arc<dyn Transport>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmSummarizer {
    pub fn new(tx: Arc<dyn Transport>, model: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            tx,
            model,
            temperature,
            max_tokens,
        }
    }

    pub fn from_config(tx: Arc<dyn Transport>, cfg: &LlmConfig) -> Self {
        Self::new(tx, cfg.model.clone(), cfg.temperature, cfg.max_tokens)
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, req: &SummaryRequest) -> Result<String> {
        tracing::info!(
            content_type = %req.content_type,
            style = %req.style,
            summary_length = req.summary_length,
            content_chars = req.content.chars().count(),
            "Requesting summary from {}",
            self.model
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: build_messages(req),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self.tx.chat(&request).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            SummarizerError::Upstream("Model API returned empty choices".to_string())
        })?;

        let summary = choice.message.content.unwrap_or_default().trim().to_string();
        if summary.is_empty() {
            return Err(SummarizerError::Upstream(
                "Model API returned an empty summary".to_string(),
            ));
        }

        Ok(summary)
    }
}
