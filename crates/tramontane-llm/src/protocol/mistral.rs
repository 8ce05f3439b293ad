//! Mistral AI chat completion API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// Mistral chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<MistralMessage>,
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
    /// Seed for reproducible sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Presence penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Frequency penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Requested output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<MistralResponseFormat>,
    /// Tool declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<MistralTool>>,
    /// Tool choice: "auto", "any", or "none"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
    /// Whether to prepend the safety prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_prompt: Option<bool>,
}

/// Message role on the Mistral wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistralRole {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
    /// Tool result
    Tool,
}

/// One conversational turn in Mistral wire format
///
/// Role invariants are enforced by the constructors below; there is no
/// builder, so a message cannot be assembled with fields its role does
/// not allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralMessage {
    /// Message role
    pub role: MistralRole,
    /// Ordered content blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<MistralContentBlock>>,
    /// Participant or tool name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tool calls made by the assistant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<MistralToolCall>>,
    /// ID of the tool call this message is a response to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl MistralMessage {
    /// System instruction wrapped in a single text block
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MistralRole::System,
            content: Some(vec![MistralContentBlock::Text { text: text.into() }]),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// User message with a single text block
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: MistralRole::User,
            content: Some(vec![MistralContentBlock::Text { text: text.into() }]),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Multimodal user message
    pub const fn user_parts(blocks: Vec<MistralContentBlock>, name: Option<String>) -> Self {
        Self {
            role: MistralRole::User,
            content: Some(blocks),
            name,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Assistant message with no tool calls
    ///
    /// `None` text omits `content` entirely; `Some` text (including the
    /// empty string) wraps in a single text block.
    pub fn assistant(text: Option<String>) -> Self {
        Self {
            role: MistralRole::Assistant,
            content: text.map(|text| vec![MistralContentBlock::Text { text }]),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Assistant message carrying tool calls, with optional leading text
    pub fn assistant_with_tools(text: Option<String>, tool_calls: Vec<MistralToolCall>) -> Self {
        Self {
            role: MistralRole::Assistant,
            content: text.map(|text| vec![MistralContentBlock::Text { text }]),
            name: None,
            tool_calls: Some(tool_calls),
            tool_call_id: None,
        }
    }

    /// Tool result answering an earlier assistant tool call
    pub fn tool_result(tool_call_id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: MistralRole::Tool,
            content: Some(vec![MistralContentBlock::Text { text: text.into() }]),
            name: Some(name.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

/// Content block within a Mistral message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MistralContentBlock {
    /// Text content
    Text {
        /// The text string
        text: String,
    },
    /// Image reference
    ImageUrl {
        /// Plain URL or `data:{mime};base64,{data}` URI
        image_url: String,
    },
    /// Document reference
    DocumentUrl {
        /// Document URL
        document_url: String,
        /// Filename of the document
        #[serde(default, skip_serializing_if = "Option::is_none")]
        document_name: Option<String>,
    },
    /// Citation reference list
    Reference {
        /// Referenced chunk ids
        reference_ids: Vec<u32>,
    },
}

/// A tool call requested by the assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralToolCall {
    /// Unique tool call identifier
    pub id: String,
    /// Call type; the API currently only defines "function"
    ///
    /// Kept a free string so unknown future types deserialize and can be
    /// filtered instead of failing the whole response.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    /// Function call details
    pub function: MistralFunctionCall,
}

impl MistralToolCall {
    /// Function-typed tool call
    pub fn function(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            call_type: Some("function".to_owned()),
            function: MistralFunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// Function name and arguments within a tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralFunctionCall {
    /// Function name
    pub name: String,
    /// JSON-encoded arguments
    pub arguments: String,
}

/// Tool declaration sent with a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralTool {
    /// Tool type (always "function")
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function specification
    pub function: MistralFunction,
}

impl MistralTool {
    /// Declare a function tool
    pub fn function(function: MistralFunction) -> Self {
        Self {
            tool_type: "function".to_owned(),
            function,
        }
    }
}

/// Function specification within a tool declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralFunction {
    /// Function name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the parameters; always present, possibly the
    /// empty object schema
    pub parameters: serde_json::Value,
}

/// Requested output format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MistralResponseFormat {
    /// Free text
    Text,
    /// Any well-formed JSON object
    JsonObject,
    /// JSON conforming to an attached schema
    JsonSchema {
        /// The schema the output must conform to
        json_schema: serde_json::Value,
    },
}

// -- Response types --

/// Mistral chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralResponse {
    /// Response identifier
    pub id: String,
    /// Object type (always "chat.completion")
    pub object: String,
    /// Creation timestamp
    pub created: u64,
    /// Model used
    pub model: String,
    /// Generated choices
    pub choices: Vec<MistralChoice>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<MistralUsage>,
}

/// Choice within a Mistral response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralChoice {
    /// Choice index
    pub index: u32,
    /// Generated message
    pub message: MistralMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage in a Mistral response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens as reported; not necessarily the sum of the others
    pub total_tokens: u32,
}
