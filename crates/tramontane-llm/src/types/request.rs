use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use super::tool::{ToolChoice, ToolSpecification};

/// Internal canonical chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Sampling parameters
    #[serde(default)]
    pub params: ChatParams,
    /// Tools the model may call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpecification>>,
    /// Tool selection constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    /// Requested output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// Format applied when `response_format` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_format: Option<ResponseFormat>,
}

/// Sampling and safety parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Stop sequences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Random seed for reproducible sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Presence penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Frequency penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Whether to inject the backend's safety prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_prompt: Option<bool>,
}

/// Requested shape of the model's output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Output kind
    pub kind: ResponseFormatKind,
    /// JSON Schema the output must conform to, for JSON output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl ResponseFormat {
    /// Free-text output
    pub const fn text() -> Self {
        Self {
            kind: ResponseFormatKind::Text,
            schema: None,
        }
    }

    /// JSON output, optionally constrained by a schema
    pub const fn json(schema: Option<serde_json::Value>) -> Self {
        Self {
            kind: ResponseFormatKind::Json,
            schema,
        }
    }
}

/// Output format kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormatKind {
    /// Free text
    Text,
    /// JSON output
    Json,
}
