//! Chat adapter core for Tramontane
//!
//! Maps a provider-agnostic conversation model (messages with roles, text,
//! images, tool calls, tool results) to and from the Mistral AI
//! chat-completions wire format. Transport, authentication, and streaming
//! assembly live outside this crate; it consumes and produces the already
//! (de)serializable payload types.
//!
//! All mapping functions are pure and stateless: safe to call from any
//! thread, nothing retained across invocations.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod protocol;
pub mod types;

pub use error::ConvertError;
pub use types::{ChatMessage, ChatRequest, ChatResult};
