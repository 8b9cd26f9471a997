//! Auth (Session Authorization Gate) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session vocabulary, access policy, authority trait
//! - `application/` - Login-auth check, server guard, client guard, sign-out
//! - `infra/` - HTTP client for the external session authority
//! - `presentation/` - HTTP handlers, DTOs, router, page guard middleware
//!
//! ## Security Model
//! - Identity lives in an external authority; nothing here stores sessions
//! - Every protected render re-validates the token, responses are never cached
//! - Any authority failure denies access (fail closed)
//! - Both guards evaluate the same privilege predicate (`admin OR self`);
//!   server-rendered pages narrow it to admin-only
//! - Denied page requests are redirected to the not-found page without
//!   revealing why

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::http_authority::HttpSessionAuthority;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::authorization::*;
    pub use crate::domain::policy::*;
    pub use crate::domain::value_object::route_user::RouteUser;
    pub use crate::domain::value_object::session_token::SessionToken;
    pub use crate::domain::value_object::user_role::UserRole;
    pub use crate::presentation::dto::*;
}

pub mod guard {
    pub use crate::application::client_guard::*;
    pub use crate::application::server_guard::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
