//! Traits pairing each request with its reply and exposing `dump`/`load`.

use crate::codec;
use crate::error::Result;
use crate::status::Status;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// Name of a command as carried by the `cmd` entry.
pub type CommandName = &'static str;

/// Closed set of reply variants for one command.
///
/// Implementors are serde enums internally tagged on `status`, whose
/// `UnknownStatus` variant is skipped by serde and handled by the codec.
pub trait Reply: Serialize + DeserializeOwned + Debug + Send + Sync + 'static {
    /// Status tags decoded into one of the implementor's own variants.
    const STATUSES: &'static [&'static str];

    /// Build the catch-all variant for a status outside [`Self::STATUSES`].
    fn unknown_status(status: String, reason: Option<String>) -> Self;

    /// Outcome carried by this reply.
    fn status(&self) -> Status<'_>;

    /// Human-readable reason, if the server gave one.
    fn reason(&self) -> Option<&str>;

    /// Decode a reply.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bytes are malformed; unknown statuses
    /// decode successfully.
    fn load(raw: &[u8]) -> Result<Self> {
        codec::decode_reply(raw)
    }

    /// Encode this reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the reply cannot be serialized.
    fn dump(&self) -> Result<Vec<u8>> {
        codec::encode_reply(self)
    }
}

/// A single command request.
pub trait Request: Clone + Debug + Send + Sync + 'static {
    /// The reply type for this command.
    type Response: Reply;

    /// Value of the `cmd` entry for this command.
    const CMD: CommandName;

    /// Encode this request, `cmd` entry included.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized.
    fn dump(&self) -> Result<Vec<u8>>;

    /// Decode a request of this command.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or hold another command.
    fn load(raw: &[u8]) -> Result<Self>;

    /// Decode the reply to this command.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bytes are malformed.
    fn load_response(raw: &[u8]) -> Result<Self::Response> {
        Self::Response::load(raw)
    }
}

/// Sum of every request in a command family, as decoded by a server.
///
/// Implementors are serde enums internally tagged on `cmd`.
pub trait AnyRequest: Serialize + DeserializeOwned + Debug + Send + Sync + 'static {
    /// Every command name of the family.
    const COMMANDS: &'static [CommandName];

    /// Command name of this request.
    fn cmd(&self) -> CommandName;

    /// Decode a request of the family.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::UnknownCommand`] for a command outside the
    /// family, or another codec error on malformed input.
    fn load(raw: &[u8]) -> Result<Self> {
        codec::decode_request(raw)
    }

    /// Encode this request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized.
    fn dump(&self) -> Result<Vec<u8>> {
        codec::encode(self)
    }
}
