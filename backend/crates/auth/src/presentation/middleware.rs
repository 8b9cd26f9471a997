//! Page Guard Middleware
//!
//! Server-side gate for `/{username}/...` pages. Runs before the page
//! handler; denied requests never reach it and are redirected to the
//! not-found page instead.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::ServerGuard;
use crate::application::config::AuthConfig;
use crate::domain::authority::SessionAuthority;
use crate::domain::entity::authorization::Session;
use crate::domain::policy::AccessPolicy;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};

/// Middleware state
pub struct PageGuardState<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    pub authority: Arc<A>,
    pub config: Arc<AuthConfig>,
    pub policy: AccessPolicy,
}

impl<A> Clone for PageGuardState<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            authority: self.authority.clone(),
            config: self.config.clone(),
            policy: self.policy,
        }
    }
}

/// Path parameters of a guarded page
#[derive(Debug, Deserialize)]
pub struct PagePath {
    pub username: String,
}

/// Admitted session, stored in request extensions for the page handler
#[derive(Debug, Clone)]
pub struct PageSession {
    pub session: Session,
    pub route: RouteUser,
}

/// Middleware that requires the page policy to admit the current session
pub async fn require_page_access<A>(
    State(state): State<PageGuardState<A>>,
    Path(path): Path<PagePath>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    A: SessionAuthority + Send + Sync + 'static,
{
    let not_found = || Redirect::to(&state.config.not_found_path).into_response();

    let Ok(route) = RouteUser::parse(&path.username) else {
        tracing::debug!("Blank username segment");
        return not_found();
    };

    let token = SessionToken::from_headers(req.headers(), &state.config.session_cookie_name);

    let guard = ServerGuard::new(state.authority.clone(), state.policy);

    match guard.admit(token.as_ref(), &route).await {
        Ok(session) => {
            tracing::debug!(
                route = %route,
                username = %session.username,
                "Page access granted"
            );
            req.extensions_mut().insert(PageSession { session, route });
            next.run(req).await
        }
        Err(denial) => {
            tracing::info!(
                route = %route,
                policy = state.policy.as_str(),
                reason = denial.reason(),
                "Page access denied"
            );
            not_found()
        }
    }
}
