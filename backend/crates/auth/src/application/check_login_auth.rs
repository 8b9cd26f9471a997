//! Check Login Auth Use Case
//!
//! One round trip to the session authority. Shared by both guards.

use std::sync::Arc;

use crate::domain::authority::SessionAuthority;
use crate::domain::entity::authorization::Session;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

/// Check login auth use case
pub struct CheckLoginAuthUseCase<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    authority: Arc<A>,
}

impl<A> CheckLoginAuthUseCase<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    pub fn new(authority: Arc<A>) -> Self {
        Self { authority }
    }

    /// Resolve the session for `token` on `username`'s route.
    ///
    /// Without a token the authority is not contacted.
    pub async fn execute(
        &self,
        token: Option<&SessionToken>,
        username: &RouteUser,
    ) -> AuthResult<Session> {
        let token = token.ok_or(AuthError::SessionMissing)?;

        let payload = self.authority.check_login_auth(token, username).await?;

        payload.into_session().ok_or(AuthError::Rejected)
    }

    /// Like [`execute`](Self::execute), collapsing every failure to `None`.
    pub async fn check(&self, token: Option<&SessionToken>, username: &RouteUser) -> Option<Session> {
        match self.execute(token, username).await {
            Ok(session) => Some(session),
            Err(e) => {
                e.log();
                None
            }
        }
    }
}
