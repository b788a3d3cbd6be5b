use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SUMMARY_LENGTH: i64 = 100;
pub const DEFAULT_FOCUS_POINTS: &str = "main ideas";

/// Integer deserializer that also accepts numeric strings and whole floats from form clients
fn deserialize_flexible_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlexibleInt {
        Int(i64),
        Float(f64),
        String(String),
    }

    match FlexibleInt::deserialize(deserializer)? {
        FlexibleInt::Int(i) => Ok(i),
        FlexibleInt::Float(f) if f.fract() == 0.0 => Ok(f as i64),
        FlexibleInt::Float(f) => Err(serde::de::Error::custom(format!(
            "summary_length must be a whole number, got {f}"
        ))),
        FlexibleInt::String(s) => s.trim().parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("summary_length must be an integer, got '{s}'"))
        }),
    }
}

/// Category of the text being summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    General,
    Article,
    Email,
    Report,
    Technical,
    Research,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::General,
        ContentType::Article,
        ContentType::Email,
        ContentType::Report,
        ContentType::Technical,
        ContentType::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::General => "general",
            ContentType::Article => "article",
            ContentType::Email => "email",
            ContentType::Report => "report",
            ContentType::Technical => "technical",
            ContentType::Research => "research",
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|ct| ct.as_str()).collect();
                format!("content_type must be one of: {}", allowed.join(", "))
            })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone applied to the generated summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Professional,
    Casual,
    Technical,
    Academic,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Professional,
        SummaryStyle::Casual,
        SummaryStyle::Technical,
        SummaryStyle::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => "professional",
            SummaryStyle::Casual => "casual",
            SummaryStyle::Technical => "technical",
            SummaryStyle::Academic => "academic",
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|style| style.as_str()).collect();
                format!("style must be one of: {}", allowed.join(", "))
            })
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_summary_length() -> i64 {
    DEFAULT_SUMMARY_LENGTH
}

fn default_focus_points() -> String {
    DEFAULT_FOCUS_POINTS.to_string()
}

/// Body of `POST /summarize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(
        default = "default_summary_length",
        deserialize_with = "deserialize_flexible_int"
    )]
    pub summary_length: i64,
    #[serde(default)]
    pub style: SummaryStyle,
    #[serde(default = "default_focus_points")]
    pub focus_points: String,
}

impl SummaryRequest {
    /// Request with every optional field at its default
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::default(),
            summary_length: DEFAULT_SUMMARY_LENGTH,
            style: SummaryStyle::default(),
            focus_points: default_focus_points(),
        }
    }

    pub fn parameters(&self) -> ParametersUsed {
        ParametersUsed {
            content_type: self.content_type,
            summary_length: self.summary_length,
            style: self.style,
            focus_points: self.focus_points.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersUsed {
    pub content_type: ContentType,
    pub summary_length: i64,
    pub style: SummaryStyle,
    pub focus_points: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub word_count: usize,
    pub char_count: usize,
    pub parameters_used: ParametersUsed,
}

impl SummaryResponse {
    /// Shape the model output into a response, counting whitespace-delimited words and characters
    pub fn from_summary(summary: String, request: &SummaryRequest) -> Self {
        Self {
            word_count: summary.split_whitespace().count(),
            char_count: summary.chars().count(),
            parameters_used: request.parameters(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Smart Summarizer API is running. POST content to /summarize.".to_string(),
        }
    }
}

/// Error payload returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// Chat completion message format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Chat completion request format
#[derive(Debug, Serialize, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

// Chat completion response format
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
