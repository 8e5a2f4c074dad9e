//! Provider error type.

use thiserror::Error;

/// A failure while completing a prompt against a provider.
///
/// `Upstream` carries the HTTP status and the message extracted from the
/// provider's error body; the remaining variants cover the request path
/// on our side of the wire.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The credential cannot be sent as an HTTP header value.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The HTTP request could not be carried out.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("provider returned {status}: {message}")]
    Upstream {
        /// HTTP status code from the provider.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The response body did not match the expected wire format.
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response contained no completion content.
    #[error("provider response contained no completion content")]
    Empty,
}
