//! `pki_enrollment_list`: list the PKI enrollments waiting for a decision.

use super::AnyCmdReq;
use crate::envelope::{AnyRequest, CommandName, Reply, Request};
use crate::error::{CodecError, Result};
use crate::ids::EnrollmentID;
use crate::status::{self, Status};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {}

impl Request for Req {
    type Response = Rep;

    const CMD: CommandName = "pki_enrollment_list";

    fn dump(&self) -> Result<Vec<u8>> {
        AnyCmdReq::from(self.clone()).dump()
    }

    fn load(raw: &[u8]) -> Result<Self> {
        match AnyCmdReq::load(raw)? {
            AnyCmdReq::PkiEnrollmentList(req) => Ok(req),
            other => Err(CodecError::UnexpectedCommand {
                expected: Self::CMD,
                actual: other.cmd(),
            }),
        }
    }
}

/// A submitted enrollment, as shown to an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkiEnrollmentListItem {
    pub enrollment_id: EnrollmentID,
    pub submit_payload: Bytes,
    pub submit_payload_signature: Bytes,
    #[serde(with = "chrono::serde::ts_microseconds")]
    pub submitted_on: DateTime<Utc>,
    pub submitter_der_x509_certificate: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rep {
    Ok {
        enrollments: Vec<PkiEnrollmentListItem>,
    },

    NotAllowed {
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
    const STATUSES: &'static [&'static str] = &[status::OK, status::NOT_ALLOWED];

    fn unknown_status(status: String, reason: Option<String>) -> Self {
        Self::UnknownStatus {
            unknown_status: status,
            reason,
        }
    }

    fn status(&self) -> Status<'_> {
        match self {
            Self::Ok { .. } => Status::Ok,
            Self::NotAllowed { .. } => Status::NotAllowed,
            Self::UnknownStatus { unknown_status, .. } => Status::Unknown(unknown_status),
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::NotAllowed { reason } | Self::UnknownStatus { reason, .. } => reason.as_deref(),
        }
    }
}
