//! Router assembly

use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::AuthConfig;
use auth::domain::SessionAuthority;
use auth::middleware::{PageGuardState, require_page_access};
use auth::models::AccessPolicy;
use auth::router::auth_router;
use booking::{BookingSource, booking_router};

use crate::pages;

/// State shared by the page handlers
pub struct WebState<A, S>
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    pub authority: Arc<A>,
    pub bookings: Arc<S>,
    pub auth_config: Arc<AuthConfig>,
}

impl<A, S> Clone for WebState<A, S>
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            authority: self.authority.clone(),
            bookings: self.bookings.clone(),
            auth_config: self.auth_config.clone(),
        }
    }
}

/// All routes, without transport layers
pub fn build_router<A, S>(authority: Arc<A>, bookings: Arc<S>, auth_config: AuthConfig) -> Router
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    let auth_config = Arc::new(auth_config);

    let page_guard = PageGuardState {
        authority: authority.clone(),
        config: auth_config.clone(),
        policy: AccessPolicy::AdminOnly,
    };

    let state = WebState {
        authority: authority.clone(),
        bookings: bookings.clone(),
        auth_config: auth_config.clone(),
    };

    let page_routes = Router::new()
        .route("/{username}/dashboard", get(pages::dashboard::<A, S>))
        .route_layer(middleware::from_fn_with_state(
            page_guard,
            require_page_access::<A>,
        ))
        .route("/{username}/tables", get(pages::tables::<A, S>))
        .route(&auth_config.not_found_path, get(pages::not_found))
        .with_state(state);

    Router::new()
        .nest("/api/auth", auth_router(authority, auth_config))
        .nest("/api/time-slots", booking_router(bookings))
        .merge(page_routes)
        .fallback(pages::not_found)
}

/// CORS for the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

/// Routes wrapped in tracing and CORS
pub fn build_app<A, S>(
    authority: Arc<A>,
    bookings: Arc<S>,
    auth_config: AuthConfig,
    origins: &[String],
) -> Router
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    build_router(authority, bookings, auth_config)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
}
