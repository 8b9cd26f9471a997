//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::set_cookie_header;

use crate::application::config::AuthConfig;
use crate::application::{ClientGuard, PageView, SignOutUseCase};
use crate::domain::authority::SessionAuthority;
use crate::domain::policy::AccessPolicy;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};
use crate::error::AuthResult;
use crate::presentation::dto::{LogoutResponse, SessionQuery, SessionStateResponse};

/// Shared state for auth handlers
pub struct AuthAppState<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    pub authority: Arc<A>,
    pub config: Arc<AuthConfig>,
}

impl<A> Clone for AuthAppState<A>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            authority: self.authority.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/auth/logout
pub async fn logout<A>(State(state): State<AuthAppState<A>>) -> impl IntoResponse
where
    A: SessionAuthority + Send + Sync + 'static,
{
    let output = SignOutUseCase::new(state.config.clone()).execute();

    let mut headers = HeaderMap::new();
    for cookie in &output.cleared_cookies {
        if let Some(value) = set_cookie_header(cookie) {
            headers.append(header::SET_COOKIE, value);
        }
    }

    (StatusCode::OK, headers, Json(LogoutResponse::default()))
}

// ============================================================================
// Session State
// ============================================================================

/// GET /api/auth/session?username=<username>
///
/// Resolved client-guard view for interactive pages. A missing or blank
/// username is a 404 problem. Otherwise 200; a failed check or a session the
/// admin-or-self policy refuses reads as `{ "authorized": false }`.
pub async fn session_state<A>(
    State(state): State<AuthAppState<A>>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> AuthResult<Json<SessionStateResponse>>
where
    A: SessionAuthority + Send + Sync + 'static,
{
    let route = RouteUser::parse(query.username.as_deref().unwrap_or_default())?;

    let token = SessionToken::from_headers(&headers, &state.config.session_cookie_name);

    let mut guard = ClientGuard::mount(
        state.authority.clone(),
        token,
        route,
        AccessPolicy::AdminOrSelf,
    );

    let response = match guard.resolved_view().await {
        PageView::Protected(session) => SessionStateResponse::authorized(session),
        _ => SessionStateResponse::unauthorized(),
    };

    Ok(Json(response))
}
