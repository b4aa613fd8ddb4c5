//! Per-command handler traits for each command family.
//!
//! Business logic implements one of these traits and gets wrapped in the
//! matching service to plug into a [`Dispatcher`](crate::Dispatcher).

use crate::error::{HandlerError, Result};
use crate::server::CommandHandler;
use async_trait::async_trait;
use enroll_protocol::Reply;
use enroll_protocol::anonymous_cmds::{self, pki_enrollment_info};
use enroll_protocol::authenticated_cmds::{
    self, pki_enrollment_accept, pki_enrollment_list, pki_enrollment_reject,
};

/// Business logic behind the authenticated commands.
///
/// Refusals (`not_allowed`, `not_found`, ...) are returned as reply
/// variants; `Err` is reserved for failures of the server itself.
#[async_trait]
pub trait AuthenticatedCmdHandler: Send + Sync + 'static {
    /// Handle `pki_enrollment_list`.
    async fn pki_enrollment_list(
        &self,
        req: pki_enrollment_list::Req,
    ) -> std::result::Result<pki_enrollment_list::Rep, HandlerError>;

    /// Handle `pki_enrollment_accept`.
    async fn pki_enrollment_accept(
        &self,
        req: pki_enrollment_accept::Req,
    ) -> std::result::Result<pki_enrollment_accept::Rep, HandlerError>;

    /// Handle `pki_enrollment_reject`.
    async fn pki_enrollment_reject(
        &self,
        req: pki_enrollment_reject::Req,
    ) -> std::result::Result<pki_enrollment_reject::Rep, HandlerError>;
}

/// Business logic behind the anonymous commands.
#[async_trait]
pub trait AnonymousCmdHandler: Send + Sync + 'static {
    /// Handle `pki_enrollment_info`.
    async fn pki_enrollment_info(
        &self,
        req: pki_enrollment_info::Req,
    ) -> std::result::Result<pki_enrollment_info::Rep, HandlerError>;
}

/// Serves the authenticated family with an [`AuthenticatedCmdHandler`].
#[derive(Debug)]
pub struct AuthenticatedService<H> {
    handler: H,
}

impl<H: AuthenticatedCmdHandler> AuthenticatedService<H> {
    /// Wrap a handler.
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }

    /// The wrapped handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

#[async_trait]
impl<H: AuthenticatedCmdHandler> CommandHandler for AuthenticatedService<H> {
    type Request = authenticated_cmds::AnyCmdReq;

    async fn handle(&self, request: Self::Request) -> Result<Vec<u8>> {
        use authenticated_cmds::AnyCmdReq;

        let raw = match request {
            AnyCmdReq::PkiEnrollmentAccept(req) => {
                self.handler.pki_enrollment_accept(req).await?.dump()?
            }
            AnyCmdReq::PkiEnrollmentList(req) => {
                self.handler.pki_enrollment_list(req).await?.dump()?
            }
            AnyCmdReq::PkiEnrollmentReject(req) => {
                self.handler.pki_enrollment_reject(req).await?.dump()?
            }
        };
        Ok(raw)
    }
}

/// Serves the anonymous family with an [`AnonymousCmdHandler`].
#[derive(Debug)]
pub struct AnonymousService<H> {
    handler: H,
}

impl<H: AnonymousCmdHandler> AnonymousService<H> {
    /// Wrap a handler.
    pub const fn new(handler: H) -> Self {
        Self { handler }
    }

    /// The wrapped handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }
}

#[async_trait]
impl<H: AnonymousCmdHandler> CommandHandler for AnonymousService<H> {
    type Request = anonymous_cmds::AnyCmdReq;

    async fn handle(&self, request: Self::Request) -> Result<Vec<u8>> {
        let anonymous_cmds::AnyCmdReq::PkiEnrollmentInfo(req) = request;
        Ok(self.handler.pki_enrollment_info(req).await?.dump()?)
    }
}
