//! Server Guard
//!
//! Pre-render gate. Runs before any protected content is built; a denial
//! means the caller redirects to the not-found page.

use std::sync::Arc;

use crate::application::check_login_auth::CheckLoginAuthUseCase;
use crate::domain::authority::SessionAuthority;
use crate::domain::entity::authorization::Session;
use crate::domain::policy::AccessPolicy;
use crate::domain::value_object::{
    route_user::RouteUser, session_token::SessionToken, user_role::UserRole,
};
use crate::error::AuthError;

/// Why a page render was refused
#[derive(Debug)]
pub enum Denial {
    /// No session could be established
    Unauthorized(AuthError),
    /// A session exists but the page policy refuses it
    InsufficientRole { role: UserRole },
}

impl Denial {
    /// Short label for logs
    pub fn reason(&self) -> &'static str {
        match self {
            Denial::Unauthorized(AuthError::SessionMissing) => "session_missing",
            Denial::Unauthorized(AuthError::Rejected) => "rejected",
            Denial::Unauthorized(AuthError::AuthorityUnreachable(_)) => "authority_unreachable",
            Denial::Unauthorized(AuthError::AuthorityStatus(_)) => "authority_status",
            Denial::Unauthorized(AuthError::MalformedResponse(_)) => "authority_malformed",
            Denial::Unauthorized(AuthError::InvalidRoute) => "invalid_route",
            Denial::Unauthorized(AuthError::Internal(_)) => "internal",
            Denial::InsufficientRole { .. } => "insufficient_role",
        }
    }
}

/// Server-side authorization guard
pub struct ServerGuard<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    check: CheckLoginAuthUseCase<A>,
    policy: AccessPolicy,
}

impl<A> ServerGuard<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    pub fn new(authority: Arc<A>, policy: AccessPolicy) -> Self {
        Self {
            check: CheckLoginAuthUseCase::new(authority),
            policy,
        }
    }

    /// Guard with the admin-only policy server-rendered pages use.
    pub fn admin_only(authority: Arc<A>) -> Self {
        Self::new(authority, AccessPolicy::AdminOnly)
    }

    /// Decide whether the page for `route` may render.
    ///
    /// Every authority failure is a denial; this never fails open.
    pub async fn admit(
        &self,
        token: Option<&SessionToken>,
        route: &RouteUser,
    ) -> Result<Session, Denial> {
        let session = self
            .check
            .execute(token, route)
            .await
            .map_err(Denial::Unauthorized)?;

        if !self.policy.permits(&session, route) {
            return Err(Denial::InsufficientRole {
                role: session.role,
            });
        }

        Ok(session)
    }
}
