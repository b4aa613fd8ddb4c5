//! Command protocol envelope for the PKI enrollment commands.
//!
//! Every command is a request struct paired with a closed reply enum. Both
//! sides travel as a single CBOR map: requests are tagged by their `cmd`
//! entry, replies by their `status` entry. A reply whose status this build
//! does not know decodes into the reply's `UnknownStatus` variant instead of
//! failing, so older clients keep working against newer servers.
//!
//! # Example
//!
//! ```
//! use enroll_protocol::authenticated_cmds::pki_enrollment_reject::{Rep, Req};
//! use enroll_protocol::{EnrollmentID, Reply, Request};
//!
//! let req = Req {
//!     enrollment_id: EnrollmentID::new(),
//! };
//! let raw_req = req.dump().unwrap();
//! assert_eq!(Req::load(&raw_req).unwrap(), req);
//!
//! let raw_rep = Rep::NotFound {
//!     reason: Some("no such request".to_string()),
//! }
//! .dump()
//! .unwrap();
//!
//! match Req::load_response(&raw_rep).unwrap() {
//!     Rep::NotFound { reason } => assert_eq!(reason.as_deref(), Some("no such request")),
//!     other => panic!("unexpected reply {other:?}"),
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod anonymous_cmds;
pub mod authenticated_cmds;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod status;
pub mod version;

// Re-export commonly used types
pub use envelope::{AnyRequest, CommandName, Reply, Request};
pub use error::{CodecError, Result};
pub use ids::{EnrollmentID, EnrollmentIDError};
pub use status::Status;
pub use version::{API_VERSION, ApiVersion, ApiVersionError};

// Re-export dependencies that are part of our public API
pub use bytes::Bytes;
pub use chrono::{DateTime, Utc};
