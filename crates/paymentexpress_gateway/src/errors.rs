//! Error types surfaced by the gateway shim.
//!
//! The taxonomy is deliberately small: mapping is total, credential
//! validation belongs to the downstream client, and downstream failures pass
//! through unchanged as [`error_stack`] reports.

/// Shorthand for a result whose error side is an [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures this shim can produce or forward.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// An operation the gateway does not offer was attempted. Callers are
    /// expected to consult the capability queries first.
    #[error("{message} is not supported by {gateway}")]
    NotSupported {
        /// The unsupported operation.
        message: &'static str,
        /// Gateway identifier.
        gateway: &'static str,
    },
    /// A field the downstream client requires was absent from the payload.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the missing payload field.
        field_name: &'static str,
    },
    /// The outbound payload or settings context could not be encoded.
    #[error("Failed to encode gateway request")]
    RequestEncodingFailed,
    /// The host's templating system failed to render the settings form.
    #[error("Failed to render the gateway settings template")]
    TemplateRenderingFailed,
    /// The downstream client failed while executing a processing step. The
    /// raw response body is carried along when one was received.
    #[error("Failed to execute a processing step: {0:?}")]
    ProcessingStepFailed(Option<bytes::Bytes>),
}
