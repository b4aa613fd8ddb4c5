//! `pki_enrollment_reject`: refuse a pending PKI enrollment request.

use super::AnyCmdReq;
use crate::envelope::{AnyRequest, CommandName, Reply, Request};
use crate::error::{CodecError, Result};
use crate::ids::EnrollmentID;
use crate::status::{self, Status};
use serde::{Deserialize, Serialize};

/// Ask the server to reject the enrollment `enrollment_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// Enrollment to reject.
    pub enrollment_id: EnrollmentID,
}

impl Request for Req {
    type Response = Rep;

    const CMD: CommandName = "pki_enrollment_reject";

    fn dump(&self) -> Result<Vec<u8>> {
        AnyCmdReq::from(self.clone()).dump()
    }

    fn load(raw: &[u8]) -> Result<Self> {
        match AnyCmdReq::load(raw)? {
            AnyCmdReq::PkiEnrollmentReject(req) => Ok(req),
            other => Err(CodecError::UnexpectedCommand {
                expected: Self::CMD,
                actual: other.cmd(),
            }),
        }
    }
}

/// Server outcome of a `pki_enrollment_reject` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rep {
    /// The enrollment is now rejected.
    Ok,

    /// The caller may not reject enrollments.
    NotAllowed {
        /// Human-readable reason.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// No enrollment has this identifier.
    NotFound {
        /// Human-readable reason.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// The enrollment was already accepted, rejected or cancelled.
    NoLongerAvailable {
        /// Human-readable reason.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// A status this build does not know.
    #[serde(skip)]
    UnknownStatus {
        /// Raw status tag, as received.
        unknown_status: String,
        /// Human-readable reason.
        reason: Option<String>,
    },
}

impl Reply for Rep {
    const STATUSES: &'static [&'static str] = &[
        status::OK,
        status::NOT_ALLOWED,
        status::NOT_FOUND,
        status::NO_LONGER_AVAILABLE,
    ];

    fn unknown_status(status: String, reason: Option<String>) -> Self {
        Self::UnknownStatus {
            unknown_status: status,
            reason,
        }
    }

    fn status(&self) -> Status<'_> {
        match self {
            Self::Ok => Status::Ok,
            Self::NotAllowed { .. } => Status::NotAllowed,
            Self::NotFound { .. } => Status::NotFound,
            Self::NoLongerAvailable { .. } => Status::NoLongerAvailable,
            Self::UnknownStatus { unknown_status, .. } => Status::Unknown(unknown_status),
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::NotAllowed { reason }
            | Self::NotFound { reason }
            | Self::NoLongerAvailable { reason }
            | Self::UnknownStatus { reason, .. } => reason.as_deref(),
        }
    }
}
