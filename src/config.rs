use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SummarizerError};

const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_OPENAI_API_KEY";

/// Main configuration structure for the summarizer service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    /// host:port the HTTP listener binds to
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: String,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from file with environment variable overrides
    /// ALWAYS returns a config - problems are logged and defaults used
    pub fn load() -> Self {
        let env_paths = ["../.env", ".env"];

        let mut env_loaded = false;
        for path in &env_paths {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            tracing::debug!("No .env file found - continuing with env vars only");
        }

        let config_path =
            env::var("SUMMARIZER_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match Self::from_yaml(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", config_path);
                        config
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse config file {}: {} - using defaults",
                            config_path,
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to read config file {}: {} - using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            tracing::info!("Config file not found at {} - using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();

        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(bind) = lookup("SUMMARIZER_BIND") {
            self.server.bind = bind;
        }
        if let Some(name) = lookup("SUMMARIZER_SERVER_NAME") {
            self.server.name = name;
        }

        // Provider overrides
        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = api_key;
        }
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.llm.model = model;
        }
        if let Some(temperature) = lookup("OPENAI_TEMPERATURE") {
            if let Ok(t) = temperature.parse() {
                self.llm.temperature = t;
            }
        }
        if let Some(max_tokens) = lookup("OPENAI_MAX_TOKENS") {
            if let Ok(max) = max_tokens.parse() {
                self.llm.max_tokens = max;
            }
        }
        if let Some(timeout) = lookup("OPENAI_TIMEOUT_SECONDS") {
            if let Ok(secs) = timeout.parse() {
                self.llm.timeout_seconds = secs;
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(SummarizerError::Config(format!(
                "server.bind must be host:port, got '{}'",
                self.server.bind
            )));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SummarizerError::Config(
                "llm.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.llm.max_tokens == 0 {
            return Err(SummarizerError::Config(
                "llm.max_tokens cannot be 0".to_string(),
            ));
        }
        if self.llm.timeout_seconds == 0 {
            return Err(SummarizerError::Config(
                "llm.timeout_seconds cannot be 0".to_string(),
            ));
        }
        if !self.has_api_key() {
            return Err(SummarizerError::Config(
                "OPENAI_API_KEY environment variable must be set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.llm.api_key.is_empty() && self.llm.api_key != PLACEHOLDER_API_KEY
    }

    /// Get provider request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "smart-summarizer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                bind: "127.0.0.1:8000".to_string(),
            },
            llm: LlmConfig {
                api_key: PLACEHOLDER_API_KEY.to_string(),
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                temperature: 0.3,
                max_tokens: 1024,
                timeout_seconds: 60,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_need_api_key() {
        let cfg = Config::default();
        assert!(!cfg.has_api_key());
        assert!(matches!(cfg.validate(), Err(SummarizerError::Config(_))));
    }

    #[test]
    fn test_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_TEMPERATURE", "0.7"),
            ("OPENAI_TIMEOUT_SECONDS", "not-a-number"),
            ("SUMMARIZER_BIND", "0.0.0.0:9000"),
        ]);
        let mut cfg = Config::default();
        cfg.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.llm.api_key, "sk-test");
        assert_eq!(cfg.llm.model, "gpt-4o-mini");
        assert!((cfg.llm.temperature - 0.7).abs() < 1e-6);
        // Unparseable values leave the previous setting in place
        assert_eq!(cfg.llm.timeout_seconds, 60);
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_yaml_without_api_key_parses() {
        let yaml = r#"
server:
  name: summarizer-staging
  version: "1.0.0"
  bind: "127.0.0.1:8100"
llm:
  base_url: "http://localhost:11434/v1"
  model: llama3
  temperature: 0.1
  max_tokens: 512
  timeout_seconds: 30
"#;
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.server.name, "summarizer-staging");
        assert_eq!(cfg.llm.api_key, "");
        assert_eq!(cfg.llm.model, "llama3");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let mut cfg = Config::default();
        cfg.llm.api_key = "sk-test".to_string();
        cfg.server.bind = "localhost".to_string();
        assert!(cfg.validate().is_err());
    }
}
