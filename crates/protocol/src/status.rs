//! Outcome vocabulary shared by every command of the family.

use std::fmt;

/// Wire tag of [`Status::Ok`].
pub const OK: &str = "ok";
/// Wire tag of [`Status::NotAllowed`].
pub const NOT_ALLOWED: &str = "not_allowed";
/// Wire tag of [`Status::NotFound`].
pub const NOT_FOUND: &str = "not_found";
/// Wire tag of [`Status::NoLongerAvailable`].
pub const NO_LONGER_AVAILABLE: &str = "no_longer_available";

/// Sent by a server that does not know the requested command.
pub const UNKNOWN_COMMAND: &str = "unknown_command";
/// Sent by a server that could not decode the request.
pub const INVALID_MSG_FORMAT: &str = "invalid_msg_format";

/// Outcome of a command, as carried by a reply's `status` entry.
///
/// Callers branch on this, never on the reply's `reason` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status<'a> {
    /// The command succeeded.
    Ok,
    /// The caller lacks the rights to run the command.
    NotAllowed,
    /// The target of the command does not exist.
    NotFound,
    /// The target existed but can no longer be acted upon.
    NoLongerAvailable,
    /// A status this build does not know, kept verbatim.
    Unknown(&'a str),
}

impl<'a> Status<'a> {
    /// Map a raw wire tag to a status.
    ///
    /// Matching is exact; anything else is kept as [`Status::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &'a str) -> Self {
        match tag {
            OK => Self::Ok,
            NOT_ALLOWED => Self::NotAllowed,
            NOT_FOUND => Self::NotFound,
            NO_LONGER_AVAILABLE => Self::NoLongerAvailable,
            other => Self::Unknown(other),
        }
    }

    /// The wire tag of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Ok => OK,
            Self::NotAllowed => NOT_ALLOWED,
            Self::NotFound => NOT_FOUND,
            Self::NoLongerAvailable => NO_LONGER_AVAILABLE,
            Self::Unknown(tag) => *tag,
        }
    }

    /// Whether the command succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
