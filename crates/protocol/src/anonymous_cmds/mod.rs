//! Commands sent before the caller holds a device, e.g. by a user waiting
//! for their enrollment to be decided.

pub mod pki_enrollment_info;

use crate::envelope::{AnyRequest, CommandName, Request};
use derive_more::From;
use serde::{Deserialize, Serialize};

/// Any request of the anonymous family, tagged by its `cmd` entry.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AnyCmdReq {
    /// See [`pki_enrollment_info`].
    PkiEnrollmentInfo(pki_enrollment_info::Req),
}

impl AnyRequest for AnyCmdReq {
    const COMMANDS: &'static [CommandName] = &[pki_enrollment_info::Req::CMD];

    fn cmd(&self) -> CommandName {
        match self {
            Self::PkiEnrollmentInfo(_) => pki_enrollment_info::Req::CMD,
        }
    }
}
