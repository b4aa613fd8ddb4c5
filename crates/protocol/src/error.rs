//! Error types for the command protocol.

use std::io;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while encoding or decoding a command message.
///
/// Only structurally malformed input produces one of these. A reply carrying
/// a status the decoder does not know is a successfully decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Serialization failed.
    #[error("Failed to serialize: {0}")]
    SerializationFailed(String),

    /// Deserialization failed (truncated input, invalid CBOR, field type mismatch).
    #[error("Failed to deserialize: {0}")]
    DeserializationFailed(String),

    /// Extra bytes followed the single top-level item.
    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),

    /// The top-level item is not a map.
    #[error("Message is not a map")]
    NotAMap,

    /// A mandatory field is missing.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field appears more than once in the map.
    #[error("Duplicate field: {0}")]
    DuplicateField(&'static str),

    /// A field holds a value of the wrong type.
    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Wire type the field must have.
        expected: &'static str,
    },

    /// The request names a command this family does not know.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The request names another command than the one being loaded.
    #[error("Unexpected command: expected {expected}, got {actual}")]
    UnexpectedCommand {
        /// Command the caller asked for.
        expected: &'static str,
        /// Command found on the wire.
        actual: &'static str,
    },
}

impl From<ciborium::de::Error<io::Error>> for CodecError {
    fn from(err: ciborium::de::Error<io::Error>) -> Self {
        Self::DeserializationFailed(err.to_string())
    }
}

impl From<ciborium::ser::Error<io::Error>> for CodecError {
    fn from(err: ciborium::ser::Error<io::Error>) -> Self {
        Self::SerializationFailed(err.to_string())
    }
}

impl From<ciborium::value::Error> for CodecError {
    fn from(err: ciborium::value::Error) -> Self {
        Self::DeserializationFailed(err.to_string())
    }
}
