//! Commands sent by an authenticated device.

pub mod pki_enrollment_accept;
pub mod pki_enrollment_list;
pub mod pki_enrollment_reject;

use crate::envelope::{AnyRequest, CommandName, Request};
use derive_more::From;
use serde::{Deserialize, Serialize};

/// Any request of the authenticated family, tagged by its `cmd` entry.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AnyCmdReq {
    /// See [`pki_enrollment_accept`].
    PkiEnrollmentAccept(pki_enrollment_accept::Req),
    /// See [`pki_enrollment_list`].
    PkiEnrollmentList(pki_enrollment_list::Req),
    /// See [`pki_enrollment_reject`].
    PkiEnrollmentReject(pki_enrollment_reject::Req),
}

impl AnyRequest for AnyCmdReq {
    const COMMANDS: &'static [CommandName] = &[
        pki_enrollment_accept::Req::CMD,
        pki_enrollment_list::Req::CMD,
        pki_enrollment_reject::Req::CMD,
    ];

    fn cmd(&self) -> CommandName {
        match self {
            Self::PkiEnrollmentAccept(_) => pki_enrollment_accept::Req::CMD,
            Self::PkiEnrollmentList(_) => pki_enrollment_list::Req::CMD,
            Self::PkiEnrollmentReject(_) => pki_enrollment_reject::Req::CMD,
        }
    }
}
