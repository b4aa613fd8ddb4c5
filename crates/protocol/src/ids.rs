//! Opaque identifiers carried by enrollment commands.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors when building an [`EnrollmentID`] from text or bytes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnrollmentIDError {
    /// The text is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The identifier does not have the expected size.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Number of bytes received.
        actual: usize,
    },
}

/// Identifier of a pending enrollment, assigned by the enrollment subsystem.
///
/// Treated as sixteen uninterpreted bytes: equality is raw byte equality and
/// no ordering is defined. Encoded on the wire as a CBOR byte string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnrollmentID([u8; EnrollmentID::SIZE]);

impl EnrollmentID {
    /// Size of the identifier in bytes.
    pub const SIZE: usize = 16;

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(*Uuid::new_v4().as_bytes())
    }

    /// Build an identifier from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse an identifier from 32 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not hex or does not hold 16 bytes.
    pub fn from_hex(s: &str) -> Result<Self, EnrollmentIDError> {
        Self::try_from(hex::decode(s)?.as_slice())
    }

    /// Raw bytes of the identifier.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Lowercase hex form of the identifier.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for EnrollmentID {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[u8]> for EnrollmentID {
    type Error = EnrollmentIDError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| EnrollmentIDError::InvalidLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            })
    }
}

impl From<Uuid> for EnrollmentID {
    fn from(uuid: Uuid) -> Self {
        Self(*uuid.as_bytes())
    }
}

impl From<EnrollmentID> for Uuid {
    fn from(id: EnrollmentID) -> Self {
        Self::from_bytes(id.0)
    }
}

impl FromStr for EnrollmentID {
    type Err = EnrollmentIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for EnrollmentID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for EnrollmentID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnrollmentID({})", self.hex())
    }
}

impl Serialize for EnrollmentID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for EnrollmentID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnrollmentIDVisitor;

        impl Visitor<'_> for EnrollmentIDVisitor {
            type Value = EnrollmentID;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a byte string of {} bytes", EnrollmentID::SIZE)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                EnrollmentID::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
            }
        }

        deserializer.deserialize_bytes(EnrollmentIDVisitor)
    }
}
