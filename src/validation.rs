use crate::error::{Result, SummarizerError};
use crate::models::SummaryRequest;

pub const MIN_CONTENT_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 50_000;
pub const MIN_SUMMARY_LENGTH: i64 = 20;
pub const MAX_SUMMARY_LENGTH: i64 = 500;

/// Value checks applied to a decoded `SummaryRequest`.
///
/// Shared by the service handler and the client so that both sides reject the same payloads
/// before anything reaches the model provider.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    min_content_chars: usize,
    max_content_chars: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestValidator {
    pub fn new() -> Self {
        Self {
            min_content_chars: MIN_CONTENT_CHARS,
            max_content_chars: MAX_CONTENT_CHARS,
        }
    }

    pub fn validate(&self, req: &SummaryRequest) -> Result<()> {
        self.validate_content(&req.content)?;
        self.validate_summary_length(req.summary_length)?;
        Ok(())
    }

    /// Lengths are measured in characters, not bytes
    pub fn validate_content(&self, content: &str) -> Result<()> {
        let chars = content.chars().count();
        if chars < self.min_content_chars {
            return Err(SummarizerError::Validation(format!(
                "content must be at least {} characters (got {chars})",
                self.min_content_chars
            )));
        }
        if chars > self.max_content_chars {
            return Err(SummarizerError::Validation(format!(
                "content must be at most {} characters (got {chars})",
                self.max_content_chars
            )));
        }
        // Padding with whitespace does not count toward the minimum
        let meaningful = content.trim().chars().count();
        if meaningful < self.min_content_chars {
            return Err(SummarizerError::Validation(format!(
                "content too short to summarize effectively: {meaningful} characters after trimming whitespace, minimum {}",
                self.min_content_chars
            )));
        }
        Ok(())
    }

    pub fn validate_summary_length(&self, summary_length: i64) -> Result<()> {
        if !(MIN_SUMMARY_LENGTH..=MAX_SUMMARY_LENGTH).contains(&summary_length) {
            return Err(SummarizerError::Validation(format!(
                "summary_length must be between {MIN_SUMMARY_LENGTH} and {MAX_SUMMARY_LENGTH} (got {summary_length})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str, summary_length: i64) -> SummaryRequest {
        let mut req = SummaryRequest::new(content);
        req.summary_length = summary_length;
        req
    }

    #[test]
    fn test_accepts_minimum_content() {
        let validator = RequestValidator::new();
        assert!(validator.validate(&request(&"a".repeat(50), 100)).is_ok());
    }

    #[test]
    fn test_rejects_short_content() {
        let validator = RequestValidator::new();
        let err = validator.validate(&request(&"a".repeat(49), 100)).unwrap_err();
        assert!(matches!(err, SummarizerError::Validation(_)));
        assert!(err.to_string().contains("at least 50"));
    }

    #[test]
    fn test_rejects_whitespace_padded_content() {
        let validator = RequestValidator::new();
        let padded = format!("{}{}", "a".repeat(10), " ".repeat(60));
        assert!(validator.validate(&request(&padded, 100)).is_err());
    }

    #[test]
    fn test_rejects_oversized_content() {
        let validator = RequestValidator::new();
        assert!(validator.validate(&request(&"a".repeat(50_001), 100)).is_err());
        assert!(validator.validate(&request(&"a".repeat(50_000), 100)).is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let validator = RequestValidator::new();
        // 50 two-byte characters
        assert!(validator.validate(&request(&"é".repeat(50), 100)).is_ok());
        assert!(validator.validate(&request(&"é".repeat(49), 100)).is_err());
    }

    #[test]
    fn test_summary_length_bounds() {
        let validator = RequestValidator::new();
        let content = "a".repeat(60);
        assert!(validator.validate(&request(&content, 20)).is_ok());
        assert!(validator.validate(&request(&content, 500)).is_ok());
        assert!(validator.validate(&request(&content, 19)).is_err());
        assert!(validator.validate(&request(&content, 501)).is_err());
        assert!(validator.validate(&request(&content, -5)).is_err());
    }
}
