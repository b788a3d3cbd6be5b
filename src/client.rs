use reqwest::Client;
use std::env;

use crate::error::{Result, SummarizerError};
use crate::models::{ErrorBody, HealthResponse, SummaryRequest, SummaryResponse};
use crate::validation::RequestValidator;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for the summarizer API.
///
/// Requests are checked with the same rules the service applies, so an invalid form never
/// leaves the machine. Each call issues at most one HTTP request.
pub struct SummarizerClient {
    client: Client,
    base_url: String,
    validator: RequestValidator,
}

impl SummarizerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            validator: RequestValidator::new(),
        }
    }

    /// Base URL from `SUMMARIZER_API_URL`, falling back to the local default
    pub fn from_env() -> Self {
        Self::new(env::var("SUMMARIZER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn summarize(&self, req: &SummaryRequest) -> Result<SummaryResponse> {
        self.validator.validate(req)?;

        tracing::debug!(url = %self.base_url, "Submitting summary request");
        let response = self
            .client
            .post(format!("{}/summarize", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        // Fall back to the raw body when the error is not a `{detail}` object
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.detail)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.to_string()
                } else {
                    text
                }
            });
        Err(SummarizerError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, SummaryStyle};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "message": "running"
            })))
            .mount(&server)
            .await;

        let client = SummarizerClient::new(format!("{}/", server.uri()));
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn test_summarize_posts_full_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_partial_json(json!({
                "content_type": "article",
                "summary_length": 60,
                "style": "technical",
                "focus_points": "methods"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "Two words",
                "word_count": 2,
                "char_count": 9,
                "parameters_used": {
                    "content_type": "article",
                    "summary_length": 60,
                    "style": "technical",
                    "focus_points": "methods"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut req = SummaryRequest::new("z".repeat(70));
        req.content_type = ContentType::Article;
        req.summary_length = 60;
        req.style = SummaryStyle::Technical;
        req.focus_points = "methods".to_string();

        let resp = SummarizerClient::new(server.uri())
            .summarize(&req)
            .await
            .unwrap();
        assert_eq!(resp.summary, "Two words");
        assert_eq!(resp.parameters_used, req.parameters());
    }

    #[tokio::test]
    async fn test_invalid_request_never_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SummarizerClient::new(server.uri());
        let err = client
            .summarize(&SummaryRequest::new("short"))
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Validation(_)));

        let mut req = SummaryRequest::new("z".repeat(70));
        req.summary_length = 1000;
        assert!(client.summarize(&req).await.is_err());
    }

    #[tokio::test]
    async fn test_error_detail_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "detail": "Internal server error: Model API error (429)"
            })))
            .mount(&server)
            .await;

        let err = SummarizerClient::new(server.uri())
            .summarize(&SummaryRequest::new("z".repeat(70)))
            .await
            .unwrap_err();
        match err {
            SummarizerError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Internal server error: Model API error (429)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
