//! Internal canonical types for chat request/response representation
//!
//! These types are provider-agnostic and serve as the normalized internal
//! representation that wire formats convert to and from.

pub mod message;
pub mod request;
pub mod response;
pub mod tool;

pub use message::{
    AssistantMessage, ChatMessage, ContentPart, CustomMessage, MediaSource, SystemMessage, ToolRequest,
    ToolResultMessage, UserContent, UserMessage,
};
pub use request::{ChatParams, ChatRequest, ResponseFormat, ResponseFormatKind};
pub use response::{ChatResult, FinishReason, TokenUsage};
pub use tool::{ToolChoice, ToolSpecification};
