//! `pki_enrollment_info`: let a submitter poll the state of their enrollment.

use super::AnyCmdReq;
use crate::envelope::{AnyRequest, CommandName, Reply, Request};
use crate::error::Result;
use crate::ids::EnrollmentID;
use crate::status::{self, Status};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    pub enrollment_id: EnrollmentID,
}

impl Request for Req {
    type Response = Rep;

    const CMD: CommandName = "pki_enrollment_info";

    fn dump(&self) -> Result<Vec<u8>> {
        AnyCmdReq::from(self.clone()).dump()
    }

    fn load(raw: &[u8]) -> Result<Self> {
        let AnyCmdReq::PkiEnrollmentInfo(req) = AnyCmdReq::load(raw)?;
        Ok(req)
    }
}

/// Where an enrollment stands.
///
/// Every state keeps the submission date; terminal states add the date of
/// the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "enrollment_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PkiEnrollmentInfoStatus {
    Submitted {
        #[serde(with = "chrono::serde::ts_microseconds")]
        submitted_on: DateTime<Utc>,
    },
    Accepted {
        #[serde(with = "chrono::serde::ts_microseconds")]
        submitted_on: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_microseconds")]
        accepted_on: DateTime<Utc>,
        accepter_der_x509_certificate: Bytes,
        accept_payload_signature: Bytes,
        accept_payload: Bytes,
    },
    Rejected {
        #[serde(with = "chrono::serde::ts_microseconds")]
        submitted_on: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_microseconds")]
        rejected_on: DateTime<Utc>,
    },
    Cancelled {
        #[serde(with = "chrono::serde::ts_microseconds")]
        submitted_on: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_microseconds")]
        cancelled_on: DateTime<Utc>,
    },
}

impl PkiEnrollmentInfoStatus {
    /// When the enrollment was submitted.
    #[must_use]
    pub fn submitted_on(&self) -> DateTime<Utc> {
        match self {
            Self::Submitted { submitted_on }
            | Self::Accepted { submitted_on, .. }
            | Self::Rejected { submitted_on, .. }
            | Self::Cancelled { submitted_on, .. } => *submitted_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rep {
    Ok {
        enrollment_status: PkiEnrollmentInfoStatus,
    },

    NotFound {
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
    const STATUSES: &'static [&'static str] = &[status::OK, status::NOT_FOUND];

    fn unknown_status(status: String, reason: Option<String>) -> Self {
        Self::UnknownStatus {
            unknown_status: status,
            reason,
        }
    }

    fn status(&self) -> Status<'_> {
        match self {
            Self::Ok { .. } => Status::Ok,
            Self::NotFound { .. } => Status::NotFound,
            Self::UnknownStatus { unknown_status, .. } => Status::Unknown(unknown_status),
        }
    }

    fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::NotFound { reason } | Self::UnknownStatus { reason, .. } => reason.as_deref(),
        }
    }
}
