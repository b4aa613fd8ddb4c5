//! Server-side dispatch: request bytes in, reply bytes out.

use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use enroll_protocol::status::{INVALID_MSG_FORMAT, UNKNOWN_COMMAND};
use enroll_protocol::{API_VERSION, AnyRequest, ApiVersion, CodecError, codec};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// API version spoken by this server.
    pub api_version: ApiVersion,
    /// Maximum request body size.
    pub max_request_size: usize,
    /// Request handling timeout.
    pub request_timeout: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            api_version: API_VERSION,
            max_request_size: 10 * 1024 * 1024, // 10MB
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl DispatcherConfig {
    /// Set the API version spoken by this server.
    #[must_use]
    pub const fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Set the maximum request body size.
    #[must_use]
    pub const fn with_max_request_size(mut self, size: usize) -> Self {
        self.max_request_size = size;
        self
    }

    /// Set the request handling timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

/// Trait for handling the decoded requests of one command family.
#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    /// Request sum type of the family served by this handler.
    type Request: AnyRequest;

    /// Run the command and return the encoded reply.
    async fn handle(&self, request: Self::Request) -> Result<Vec<u8>>;
}

/// Decodes requests, runs them through a handler and encodes the reply.
pub struct Dispatcher<H: CommandHandler> {
    handler: Arc<H>,
    config: DispatcherConfig,
}

impl<H: CommandHandler> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: self.config.clone(),
        }
    }
}

impl<H: CommandHandler> Dispatcher<H> {
    /// Create a new dispatcher.
    pub fn new(handler: H, config: DispatcherConfig) -> Self {
        Self {
            handler: Arc::new(handler),
            config,
        }
    }

    /// The dispatcher configuration.
    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Handle one request body sent by a peer speaking `api_version`.
    ///
    /// Undecodable requests are answered with an `invalid_msg_format` reply
    /// and unknown commands with an `unknown_command` reply, so the peer
    /// always gets bytes it can load.
    ///
    /// # Errors
    ///
    /// Returns an error if the API version is incompatible, the body is too
    /// large, the handler fails or the handler times out.
    #[instrument(skip(self, body), fields(size = body.len()))]
    pub async fn dispatch(&self, api_version: ApiVersion, body: Bytes) -> Result<Bytes> {
        if !self.config.api_version.is_compatible_with(&api_version) {
            warn!(server = %self.config.api_version, "rejecting incompatible API version");
            return Err(Error::UnsupportedApiVersion {
                client: api_version,
                server: self.config.api_version,
            });
        }

        if body.len() > self.config.max_request_size {
            warn!(max = self.config.max_request_size, "rejecting oversized request");
            return Err(Error::RequestTooLarge {
                size: body.len(),
                max: self.config.max_request_size,
            });
        }

        let request = match H::Request::load(&body) {
            Ok(request) => request,
            Err(CodecError::UnknownCommand(cmd)) => {
                warn!(cmd = %cmd, "unknown command");
                return Ok(Bytes::from(codec::encode_status(UNKNOWN_COMMAND, None)?));
            }
            Err(e) => {
                warn!(error = %e, "malformed request");
                let reason = e.to_string();
                return Ok(Bytes::from(codec::encode_status(
                    INVALID_MSG_FORMAT,
                    Some(&reason),
                )?));
            }
        };

        let cmd = request.cmd();
        debug!(cmd, "dispatching command");

        let reply = timeout(self.config.request_timeout, self.handler.handle(request))
            .await
            .map_err(|_| {
                warn!(cmd, "handler timed out");
                Error::Timeout(self.config.request_timeout)
            })??;

        debug!(cmd, size = reply.len(), "command handled");
        Ok(Bytes::from(reply))
    }
}
