//! Conversion between internal types and the Mistral wire format

use crate::error::ConvertError;
use crate::protocol::mistral::{
    MistralContentBlock, MistralFunction, MistralMessage, MistralRequest, MistralResponse, MistralResponseFormat,
    MistralTool, MistralToolCall, MistralUsage,
};
use crate::types::{
    AssistantMessage, ChatMessage, ChatRequest, ChatResult, ContentPart, FinishReason, MediaSource, ResponseFormat,
    ResponseFormatKind, TokenUsage, ToolChoice, ToolRequest, ToolSpecification, UserContent, UserMessage,
};

// -- Inbound: internal types -> Mistral wire format --

/// Convert a conversation to wire messages, order-preserving and one-to-one
pub fn messages_to_mistral(messages: &[ChatMessage]) -> Result<Vec<MistralMessage>, ConvertError> {
    messages.iter().map(chat_message_to_mistral).collect()
}

fn chat_message_to_mistral(message: &ChatMessage) -> Result<MistralMessage, ConvertError> {
    match message {
        ChatMessage::System(msg) => Ok(MistralMessage::system(&msg.text)),
        ChatMessage::Assistant(msg) => Ok(assistant_to_mistral(msg)),
        ChatMessage::User(msg) => user_to_mistral(msg),
        ChatMessage::ToolResult(msg) => Ok(MistralMessage::tool_result(&msg.id, &msg.tool_name, &msg.text)),
        ChatMessage::Custom(_) => Err(ConvertError::UnknownMessageType { kind: "custom" }),
    }
}

fn assistant_to_mistral(message: &AssistantMessage) -> MistralMessage {
    if !message.has_tool_requests() {
        // Empty text still wraps in a text block; only `None` omits the
        // content field.
        return MistralMessage::assistant(message.text.clone());
    }

    let tool_calls = message.tool_requests.iter().map(tool_request_to_mistral).collect();

    // Alongside tool calls, blank text is omitted entirely.
    let text = message.text.as_ref().filter(|text| !text.trim().is_empty()).cloned();

    MistralMessage::assistant_with_tools(text, tool_calls)
}

fn user_to_mistral(message: &UserMessage) -> Result<MistralMessage, ConvertError> {
    match &message.content {
        UserContent::Text(text) => Ok(MistralMessage::user_text(text)),
        UserContent::Parts(parts) => {
            let blocks = parts.iter().map(content_part_to_mistral).collect::<Result<_, _>>()?;
            Ok(MistralMessage::user_parts(blocks, message.name.clone()))
        }
    }
}

fn content_part_to_mistral(part: &ContentPart) -> Result<MistralContentBlock, ConvertError> {
    match part {
        ContentPart::Text { text } => Ok(MistralContentBlock::Text { text: text.clone() }),
        ContentPart::Image { image } => Ok(MistralContentBlock::ImageUrl {
            image_url: media_url(image),
        }),
        ContentPart::Audio { .. } => Err(ConvertError::UnsupportedContentType { kind: "audio" }),
        ContentPart::Pdf { .. } => Err(ConvertError::UnsupportedContentType { kind: "pdf" }),
    }
}

fn media_url(source: &MediaSource) -> String {
    match source {
        MediaSource::Url(url) => url.clone(),
        MediaSource::Bytes { mime_type, data } => {
            let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, data);
            format!("data:{mime_type};base64,{encoded}")
        }
    }
}

fn tool_request_to_mistral(request: &ToolRequest) -> MistralToolCall {
    MistralToolCall::function(&request.id, &request.name, &request.arguments)
}

/// Convert tool specifications to wire declarations, order-preserving
pub fn tools_to_mistral(specifications: &[ToolSpecification]) -> Vec<MistralTool> {
    specifications.iter().map(tool_to_mistral).collect()
}

fn tool_to_mistral(specification: &ToolSpecification) -> MistralTool {
    // The wire schema always carries a well-formed parameters object,
    // even when the specification declares none.
    let parameters = specification
        .parameters
        .clone()
        .unwrap_or_else(|| serde_json::json!({"type": "object", "properties": {}}));

    MistralTool::function(MistralFunction {
        name: specification.name.clone(),
        description: specification.description.clone(),
        parameters,
    })
}

/// Resolve the effective response format and map it to the wire variant
///
/// The fallback substitutes an absent preference before the kind is
/// specialized: a schema-bearing JSON request is strictly more specific
/// than a bare JSON-object request, so resolution order matters.
pub fn response_format_to_mistral(
    preferred: Option<&ResponseFormat>,
    fallback: Option<&ResponseFormat>,
) -> Option<MistralResponseFormat> {
    let format = preferred.or(fallback)?;
    Some(match format.kind {
        ResponseFormatKind::Text => MistralResponseFormat::Text,
        ResponseFormatKind::Json => format
            .schema
            .clone()
            .map_or(MistralResponseFormat::JsonObject, |json_schema| {
                MistralResponseFormat::JsonSchema { json_schema }
            }),
    })
}

/// Assemble a full wire request from an internal chat request
pub fn request_to_mistral(request: &ChatRequest) -> Result<MistralRequest, ConvertError> {
    Ok(MistralRequest {
        model: request.model.clone(),
        messages: messages_to_mistral(&request.messages)?,
        temperature: request.params.temperature,
        top_p: request.params.top_p,
        max_tokens: request.params.max_tokens,
        stop: request.params.stop.clone(),
        random_seed: request.params.random_seed,
        presence_penalty: request.params.presence_penalty,
        frequency_penalty: request.params.frequency_penalty,
        response_format: response_format_to_mistral(request.response_format.as_ref(), request.fallback_format.as_ref()),
        tools: request.tools.as_deref().map(tools_to_mistral),
        tool_choice: request.tool_choice.map(|choice| tool_choice_to_mistral(choice).to_owned()),
        safe_prompt: request.params.safe_prompt,
    })
}

const fn tool_choice_to_mistral(choice: ToolChoice) -> &'static str {
    match choice {
        ToolChoice::Auto => "auto",
        ToolChoice::Required => "any",
        ToolChoice::None => "none",
    }
}

// -- Outbound: Mistral wire format -> internal types --

/// Map a wire response to the assistant message of its first choice
///
/// # Panics
///
/// Panics if the response carries no choices; excluding empty-choice
/// responses is the caller's contract.
pub fn assistant_message_from_mistral(response: &MistralResponse) -> AssistantMessage {
    let message = &response.choices[0].message;

    if let Some(tool_calls) = &message.tool_calls
        && !tool_calls.is_empty()
    {
        return AssistantMessage::from_tool_requests(tool_calls_to_requests(tool_calls));
    }

    match &message.content {
        Some(blocks) if !blocks.is_empty() => AssistantMessage::from_text(flatten_blocks(blocks)),
        _ => AssistantMessage::default(),
    }
}

/// Reduce ordered content blocks to a single comma-joined text string
///
/// Deliberately lossy: the internal assistant message carries one text
/// payload, not structured multimodal content.
fn flatten_blocks(blocks: &[MistralContentBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            MistralContentBlock::Text { text } => text.clone(),
            MistralContentBlock::ImageUrl { image_url } => image_url.clone(),
            MistralContentBlock::DocumentUrl { document_url, .. } => document_url.clone(),
            MistralContentBlock::Reference { reference_ids } => reference_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Convert wire tool calls to internal requests, keeping function calls only
///
/// Calls with a different or missing declared type are dropped, not
/// errored: the vendor may grow new call types independently.
pub fn tool_calls_to_requests(tool_calls: &[MistralToolCall]) -> Vec<ToolRequest> {
    tool_calls
        .iter()
        .filter(|call| {
            let keep = call.call_type.as_deref() == Some("function");
            if !keep {
                tracing::debug!(id = %call.id, call_type = ?call.call_type, "skipping non-function tool call");
            }
            keep
        })
        .map(|call| ToolRequest {
            id: call.id.clone(),
            name: call.function.name.clone(),
            arguments: call.function.arguments.clone(),
        })
        .collect()
}

/// Copy usage counters when the backend reported them
pub fn usage_from_mistral(usage: Option<&MistralUsage>) -> Option<TokenUsage> {
    usage.map(|usage| TokenUsage {
        input_tokens: usage.prompt_tokens,
        output_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    })
}

/// Parse a finish reason string
pub fn parse_finish_reason(reason: &str) -> Option<FinishReason> {
    match reason {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "tool_calls" => Some(FinishReason::ToolExecution),
        "content_filter" => Some(FinishReason::ContentFilter),
        // "model_length" is known but unmapped, like any vocabulary the
        // API may grow later.
        _ => None,
    }
}

/// Assemble the full result of one chat call from a wire response
///
/// # Panics
///
/// Panics if the response carries no choices; excluding empty-choice
/// responses is the caller's contract.
pub fn response_to_result(response: &MistralResponse) -> ChatResult {
    let finish_reason = response.choices[0].finish_reason.as_deref().and_then(|reason| {
        let mapped = parse_finish_reason(reason);
        if mapped.is_none() {
            tracing::debug!(finish_reason = %reason, "unmapped finish reason");
        }
        mapped
    });

    ChatResult {
        message: assistant_message_from_mistral(response),
        usage: usage_from_mistral(response.usage.as_ref()),
        finish_reason,
    }
}
