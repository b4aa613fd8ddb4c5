//! Typed command client.

use crate::error::{Error, Result};
use crate::transport::Transport;
use bytes::Bytes;
use enroll_protocol::{API_VERSION, ApiVersion, Reply, Request};
use tracing::{debug, instrument};

/// Configuration for the command client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API version announced with every request.
    pub api_version: ApiVersion,
    /// Maximum reply body size.
    pub max_reply_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: API_VERSION,
            max_reply_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ClientConfig {
    /// Set the announced API version.
    #[must_use]
    pub const fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set the maximum reply body size.
    #[must_use]
    pub const fn with_max_reply_size(mut self, size: usize) -> Self {
        self.max_reply_size = size;
        self
    }
}

/// Sends typed requests over a [`Transport`] and decodes the typed replies.
#[derive(Debug)]
pub struct CommandClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> CommandClient<T> {
    /// Create a client with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    /// Create a client with the given configuration.
    pub const fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The client configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and wait for its reply.
    ///
    /// Every status the server answers with, known or not, comes back as
    /// `Ok`; callers match on the reply variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be encoded, the transport
    /// fails, the reply is too large or the reply bytes are malformed.
    #[instrument(skip(self, request), fields(cmd = R::CMD))]
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response> {
        let body = Bytes::from(request.dump()?);
        debug!(size = body.len(), "sending request");

        let raw = self.transport.send(self.config.api_version, body).await?;
        if raw.len() > self.config.max_reply_size {
            return Err(Error::ReplyTooLarge {
                size: raw.len(),
                max: self.config.max_reply_size,
            });
        }

        let reply = R::load_response(&raw)?;
        debug!(status = %reply.status(), "received reply");
        Ok(reply)
    }
}
