//! Error types for the dispatch layer.

use enroll_protocol::{ApiVersion, CodecError};
use std::time::Duration;
use thiserror::Error;

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sending and dispatching commands.
///
/// A command refused by the server (`not_allowed`, `not_found`, ...) is not
/// an error: it comes back as the reply value.
#[derive(Debug, Error)]
pub enum Error {
    /// Codec errors during serialization/deserialization.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// The bytes could not be carried to or from the peer.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Handler errors from the server side.
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    /// Client and server speak incompatible API versions.
    #[error("Unsupported API version {client} (server speaks {server})")]
    UnsupportedApiVersion {
        /// Version announced by the client.
        client: ApiVersion,
        /// Version spoken by the server.
        server: ApiVersion,
    },

    /// Request body too large.
    #[error("Request size {size} exceeds maximum {max}")]
    RequestTooLarge {
        /// Size of the request.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Reply body too large.
    #[error("Reply size {size} exceeds maximum {max}")]
    ReplyTooLarge {
        /// Size of the reply.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Operation timed out.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The peer could not be reached.
    #[error("Peer unreachable: {0}")]
    Unreachable(String),

    /// The exchange was cut before a reply arrived.
    #[error("Connection closed before reply: {0}")]
    Closed(String),
}

/// Handler errors from server-side processing.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Handler returned an error.
    #[error("Handler error: {0}")]
    Internal(String),
}
