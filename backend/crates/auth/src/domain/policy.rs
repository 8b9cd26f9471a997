//! Access Policy
//!
//! The one privilege predicate both guards evaluate. Pre-render and
//! post-render checks must never disagree about who is an admin or who owns
//! a route, so neither guard compares roles or usernames on its own.

use crate::domain::entity::authorization::Session;
use crate::domain::value_object::route_user::RouteUser;

/// `role == admin OR username == route username`
pub fn is_admin_or_self(session: &Session, route: &RouteUser) -> bool {
    session.is_admin() || session.username == route.as_str()
}

/// Which sessions a page admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Admins only, whoever owns the route. Used by server-rendered pages.
    AdminOnly,
    /// Admins, or the user the route belongs to.
    AdminOrSelf,
}

impl AccessPolicy {
    pub fn permits(&self, session: &Session, route: &RouteUser) -> bool {
        match self {
            // Narrowing of the shared predicate: the self-match arm is dropped.
            AccessPolicy::AdminOnly => is_admin_or_self(session, route) && session.is_admin(),
            AccessPolicy::AdminOrSelf => is_admin_or_self(session, route),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessPolicy::AdminOnly => "admin_only",
            AccessPolicy::AdminOrSelf => "admin_or_self",
        }
    }
}
