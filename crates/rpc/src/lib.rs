//! Dispatch layer for the enrollment command protocol.
//!
//! A [`Dispatcher`] turns request bytes into reply bytes by decoding the
//! request, running it through a [`CommandHandler`] and encoding the reply.
//! A [`CommandClient`] does the opposite over any [`Transport`]; the
//! [`MemoryTransport`] wires the two together in-process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod handlers;
pub mod server;
pub mod transport;

pub use client::{ClientConfig, CommandClient};
pub use error::{Error, HandlerError, Result, TransportError};
pub use handlers::{
    AnonymousCmdHandler, AnonymousService, AuthenticatedCmdHandler, AuthenticatedService,
};
pub use server::{CommandHandler, Dispatcher, DispatcherConfig};
pub use transport::{MemoryTransport, Transport};

// Re-export the protocol crate
pub use enroll_protocol as protocol;
