//! Auth Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::authority::SessionAuthority;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any authority implementation
pub fn auth_router<A>(authority: Arc<A>, config: Arc<AuthConfig>) -> Router
where
    A: SessionAuthority + Send + Sync + 'static,
{
    let state = AuthAppState { authority, config };

    Router::new()
        .route("/logout", get(handlers::logout::<A>))
        .route("/session", get(handlers::session_state::<A>))
        .with_state(state)
}
