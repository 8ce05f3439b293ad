use thiserror::Error;

/// Errors raised while mapping between internal and wire formats
///
/// Both variants are contract violations by the caller, never transient
/// failures: retrying the same input cannot succeed. Unrecognized vendor
/// vocabulary (new finish reasons, extra fields, unknown tool-call types)
/// is absorbed by the mappers instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A multimodal user content part has no wire representation
    #[error("unsupported content type: {kind}")]
    UnsupportedContentType {
        /// Variant name of the offending part
        kind: &'static str,
    },

    /// A conversation message the mapping cannot classify
    #[error("unknown message type: {kind}")]
    UnknownMessageType {
        /// Variant name of the offending message
        kind: &'static str,
    },
}
