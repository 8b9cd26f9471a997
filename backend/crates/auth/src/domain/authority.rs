//! Session Authority
//!
//! Interface to the external service that validates a session token against
//! a username. The HTTP implementation lives in the infrastructure layer.

use crate::domain::entity::authorization::Authorization;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};
use crate::error::AuthResult;

/// Session authority trait
#[trait_variant::make(SessionAuthority: Send)]
pub trait LocalSessionAuthority {
    /// Ask the authority whether `token` may act for `username`.
    ///
    /// Returns the raw payload, including `authorized: false` answers.
    /// Transport failures, non-success statuses and unreadable bodies are
    /// errors. Implementations must not serve this from a cache.
    async fn check_login_auth(
        &self,
        token: &SessionToken,
        username: &RouteUser,
    ) -> AuthResult<Authorization>;
}
