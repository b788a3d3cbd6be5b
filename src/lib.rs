pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod server;
pub mod summarizer;
pub mod transport;
pub mod validation;

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Result, SummarizerError};
use crate::server::AppState;
use crate::summarizer::LlmSummarizer;
use crate::transport::{OpenAiTransport, Transport};

/// Wire the provider transport and summarizer into request state
pub fn build_state(cfg: &Config) -> Result<AppState> {
    if !cfg.has_api_key() {
        return Err(SummarizerError::Config(
            "OPENAI_API_KEY not found in environment variables".to_string(),
        ));
    }

    let transport = Arc::new(OpenAiTransport::from_config(&cfg.llm)?);
    let summarizer = LlmSummarizer::from_config(transport as Arc<dyn Transport>, &cfg.llm);

    Ok(AppState::new(Arc::new(summarizer)))
}
