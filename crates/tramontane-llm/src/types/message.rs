use serde::{Deserialize, Serialize};

/// One message in a provider-agnostic conversation
///
/// Wire adapters match on this exhaustively; adding a variant is a
/// compile error at every mapping site rather than a silent fall-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessage {
    /// System instruction
    System(SystemMessage),
    /// End-user message
    User(UserMessage),
    /// Model response, possibly requesting tool executions
    Assistant(AssistantMessage),
    /// Result of a tool execution requested by the assistant
    ToolResult(ToolResultMessage),
    /// Provider-specific message, only meaningful to selected backends
    Custom(CustomMessage),
}

/// System instruction content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// Instruction text
    pub text: String,
}

/// Message authored by the end user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessage {
    /// Optional participant name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Message content
    pub content: UserContent,
}

/// User message content, either a single text or structured parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserContent {
    /// Plain text content
    Text(String),
    /// Multimodal content parts
    Parts(Vec<ContentPart>),
}

/// Individual part within a multimodal user message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text {
        /// The text string
        text: String,
    },
    /// Image content
    Image {
        /// Image payload or reference
        image: MediaSource,
    },
    /// Audio content (not supported by every backend)
    Audio {
        /// Audio payload or reference
        audio: MediaSource,
    },
    /// PDF document content (not supported by every backend)
    Pdf {
        /// Document payload or reference
        pdf: MediaSource,
    },
}

/// A media payload, either a remote reference or inline bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    /// Remote URL
    Url(String),
    /// Inline payload with its mime type
    Bytes {
        /// Mime type (e.g. "image/png")
        mime_type: String,
        /// Raw payload bytes
        data: Vec<u8>,
    },
}

/// Model response message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    /// Response text, absent when the model only requested tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Tool executions requested by the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_requests: Vec<ToolRequest>,
}

impl AssistantMessage {
    /// Create a plain text response
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tool_requests: Vec::new(),
        }
    }

    /// Create a tool-calling response with no text
    pub const fn from_tool_requests(tool_requests: Vec<ToolRequest>) -> Self {
        Self {
            text: None,
            tool_requests,
        }
    }

    /// Whether the model requested any tool executions
    pub const fn has_tool_requests(&self) -> bool {
        !self.tool_requests.is_empty()
    }
}

/// A request, emitted by the assistant, to invoke a named tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Opaque identifier linking the request to its later result
    pub id: String,
    /// Tool name
    pub name: String,
    /// JSON-encoded arguments
    pub arguments: String,
}

/// Result of a tool execution, sent back to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMessage {
    /// ID of the tool request this result responds to
    pub id: String,
    /// Name of the executed tool
    pub tool_name: String,
    /// Tool output
    pub text: String,
}

/// Provider-specific message carrying opaque attributes
///
/// Backends that do not understand the attributes must reject the
/// message instead of guessing at a wire shape for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomMessage {
    /// Opaque provider-specific payload
    pub attributes: serde_json::Map<String, serde_json::Value>,
}
