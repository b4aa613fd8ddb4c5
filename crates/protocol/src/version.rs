//! Protocol API versions.
//!
//! The major `version` changes on incompatible wire changes; `revision`
//! counts compatible additions (new commands, new statuses).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error when parsing an [`ApiVersion`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid API version: {0:?}")]
pub struct ApiVersionError(String);

/// Version of the command protocol spoken by a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    /// Major version.
    pub version: u32,
    /// Compatible revision within the major version.
    pub revision: u32,
}

impl ApiVersion {
    /// Create a new version.
    #[must_use]
    pub const fn new(version: u32, revision: u32) -> Self {
        Self { version, revision }
    }

    /// Whether a peer speaking `other` can exchange commands with us.
    #[must_use]
    pub const fn is_compatible_with(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

/// Original API.
pub const API_V1_VERSION: ApiVersion = ApiVersion::new(1, 3);
/// SAS-based handshake.
pub const API_V2_VERSION: ApiVersion = ApiVersion::new(2, 8);
/// Challenge answer format change.
pub const API_V3_VERSION: ApiVersion = ApiVersion::new(3, 2);
/// PKI enrollment commands.
pub const API_V4_VERSION: ApiVersion = ApiVersion::new(4, 0);

/// Version spoken by this build.
pub const API_VERSION: ApiVersion = API_V4_VERSION;

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.version, self.revision)
    }
}

impl FromStr for ApiVersion {
    type Err = ApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, revision) = s
            .split_once('.')
            .ok_or_else(|| ApiVersionError(s.to_owned()))?;
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| ApiVersionError(s.to_owned()))
        };
        Ok(Self::new(parse(version)?, parse(revision)?))
    }
}
