//! HTTP Session Authority
//!
//! `POST {authority}/api/auth/check-login-auth?username=<username>` with the
//! session token forwarded as `Cookie: auth_token=<token>`.

use axum::http::header;
use platform::cookie::cookie_pair;
use platform::http_client::{HttpClientConfig, join_url};

use crate::application::config::AuthConfig;
use crate::domain::authority::SessionAuthority;
use crate::domain::entity::authorization::Authorization;
use crate::domain::value_object::{route_user::RouteUser, session_token::SessionToken};
use crate::error::{AuthError, AuthResult};

pub const CHECK_LOGIN_AUTH_PATH: &str = "/api/auth/check-login-auth";

/// Authority reached over HTTP
#[derive(Clone)]
pub struct HttpSessionAuthority {
    http: reqwest::Client,
    endpoint: String,
    cookie_name: String,
}

impl HttpSessionAuthority {
    /// Build a dedicated client from the auth configuration.
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let http = HttpClientConfig::default()
            .with_request_timeout(config.authority_timeout)
            .build()
            .map_err(|e| AuthError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(http, config))
    }

    /// Use an existing client. It must not cache responses.
    pub fn with_client(http: reqwest::Client, config: &AuthConfig) -> Self {
        Self {
            http,
            endpoint: join_url(&config.authority_url, CHECK_LOGIN_AUTH_PATH),
            cookie_name: config.session_cookie_name.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SessionAuthority for HttpSessionAuthority {
    async fn check_login_auth(
        &self,
        token: &SessionToken,
        username: &RouteUser,
    ) -> AuthResult<Authorization> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("username", username.as_str())])
            .header(header::COOKIE, cookie_pair(&self.cookie_name, token.as_str()))
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(AuthError::AuthorityUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::AuthorityStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(AuthError::AuthorityUnreachable)?;

        parse_authorization(&body)
    }
}

fn parse_authorization(body: &str) -> AuthResult<Authorization> {
    serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))
}
