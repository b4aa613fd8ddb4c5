//! Byte transports carrying one request body to a server and its reply back.

use crate::error::{Result, TransportError};
use crate::server::{CommandHandler, Dispatcher};
use async_trait::async_trait;
use bytes::Bytes;
use enroll_protocol::ApiVersion;
use std::fmt::Debug;
use tokio::sync::RwLock;
use tracing::debug;

/// Carries request bodies to a server.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send one request body, announcing `api_version`, and wait for the
    /// reply body.
    async fn send(&self, api_version: ApiVersion, body: Bytes) -> Result<Bytes>;
}

/// In-process transport handing bodies straight to a [`Dispatcher`].
///
/// Each request runs on its own task, so a panicking handler surfaces as a
/// [`TransportError::Closed`] instead of tearing down the caller.
pub struct MemoryTransport<H: CommandHandler> {
    dispatcher: RwLock<Option<Dispatcher<H>>>,
}

impl<H: CommandHandler> MemoryTransport<H> {
    /// Create a transport routing to `dispatcher`.
    pub fn new(dispatcher: Dispatcher<H>) -> Self {
        Self {
            dispatcher: RwLock::new(Some(dispatcher)),
        }
    }

    /// Detach the dispatcher; later sends fail as unreachable.
    pub async fn shutdown(&self) {
        debug!("shutting down memory transport");
        self.dispatcher.write().await.take();
    }
}

impl<H: CommandHandler> Debug for MemoryTransport<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl<H: CommandHandler> Transport for MemoryTransport<H> {
    async fn send(&self, api_version: ApiVersion, body: Bytes) -> Result<Bytes> {
        let dispatcher = self
            .dispatcher
            .read()
            .await
            .clone()
            .ok_or_else(|| TransportError::Unreachable("dispatcher shut down".to_string()))?;

        tokio::spawn(async move { dispatcher.dispatch(api_version, body).await })
            .await
            .map_err(|e| TransportError::Closed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::server::DispatcherConfig;
    use enroll_protocol::authenticated_cmds::{AnyCmdReq, pki_enrollment_reject};
    use enroll_protocol::{API_VERSION, EnrollmentID, Reply, Request};

    struct Echo;

    #[async_trait]
    impl CommandHandler for Echo {
        type Request = AnyCmdReq;

        async fn handle(&self, _request: AnyCmdReq) -> Result<Vec<u8>> {
            Ok(pki_enrollment_reject::Rep::NotFound { reason: None }.dump()?)
        }
    }

    struct Panicking;

    #[async_trait]
    impl CommandHandler for Panicking {
        type Request = AnyCmdReq;

        async fn handle(&self, _request: AnyCmdReq) -> Result<Vec<u8>> {
            panic!("handler bug");
        }
    }

    fn body() -> Bytes {
        Bytes::from(
            pki_enrollment_reject::Req {
                enrollment_id: EnrollmentID::new(),
            }
            .dump()
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_send_reaches_dispatcher() {
        let transport =
            MemoryTransport::new(Dispatcher::new(Echo, DispatcherConfig::default()));

        let reply = transport.send(API_VERSION, body()).await.unwrap();

        assert_eq!(
            pki_enrollment_reject::Rep::load(&reply).unwrap(),
            pki_enrollment_reject::Rep::NotFound { reason: None }
        );
    }

    #[tokio::test]
    async fn test_send_after_shutdown_is_unreachable() {
        let transport =
            MemoryTransport::new(Dispatcher::new(Echo, DispatcherConfig::default()));
        transport.shutdown().await;

        let result = transport.send(API_VERSION, body()).await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Unreachable(_)))
        ));
    }

    #[tokio::test]
    async fn test_panicking_handler_closes_exchange() {
        let transport =
            MemoryTransport::new(Dispatcher::new(Panicking, DispatcherConfig::default()));

        let result = transport.send(API_VERSION, body()).await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Closed(_)))
        ));
    }
}
