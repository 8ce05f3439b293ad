use serde::{Deserialize, Serialize};

use super::message::AssistantMessage;

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of generation
    Stop,
    /// Hit the token limit
    Length,
    /// Model decided to call a tool
    ToolExecution,
    /// Content was filtered by safety systems
    ContentFilter,
}

/// Token usage counters reported by the backend
///
/// The totals are copied as reported; `total_tokens` is not required to
/// equal the sum of the other two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub input_tokens: u32,
    /// Tokens generated in the completion
    pub output_tokens: u32,
    /// Total tokens as reported by the backend
    pub total_tokens: u32,
}

/// Complete outcome of one chat call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Generated assistant message
    pub message: AssistantMessage,
    /// Token usage, when the backend reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Why generation stopped, when the backend's vocabulary is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}
