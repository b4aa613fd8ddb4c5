//! `pki_enrollment_accept`: accept a pending PKI enrollment and register the
//! certificates of the new user and device.

use super::AnyCmdReq;
use crate::envelope::{AnyRequest, CommandName, Reply, Request};
use crate::error::{CodecError, Result};
use crate::ids::EnrollmentID;
use crate::status::{self, Status};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Certificates and signed payload produced by the accepting administrator.
///
/// The payloads are opaque to the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    pub accept_payload: Bytes,
    pub accept_payload_signature: Bytes,
    pub accepter_der_x509_certificate: Bytes,
    pub device_certificate: Bytes,
    pub enrollment_id: EnrollmentID,
    pub redacted_device_certificate: Bytes,
    pub redacted_user_certificate: Bytes,
    pub user_certificate: Bytes,
}

impl Request for Req {
    type Response = Rep;

    const CMD: CommandName = "pki_enrollment_accept";

    fn dump(&self) -> Result<Vec<u8>> {
        AnyCmdReq::from(self.clone()).dump()
    }

    fn load(raw: &[u8]) -> Result<Self> {
        match AnyCmdReq::load(raw)? {
            AnyCmdReq::PkiEnrollmentAccept(req) => Ok(req),
            other => Err(CodecError::UnexpectedCommand {
                expected: Self::CMD,
                actual: other.cmd(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rep {
    Ok,

    NotAllowed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    NotFound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    NoLongerAvailable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    #[serde(skip)]
    UnknownStatus {
        unknown_status: String,
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
