//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant means "not authorized" at
//! the guard boundary; the variants exist so logs and tests can tell a
//! rejected session apart from an unreachable authority.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session cookie on the request
    #[error("Session token missing")]
    SessionMissing,

    /// The authority answered but did not authorize the token/username pair
    #[error("Session rejected by authority")]
    Rejected,

    /// The authority could not be reached (connect error, timeout, reset)
    #[error("Authority unreachable: {0}")]
    AuthorityUnreachable(#[source] reqwest::Error),

    /// The authority answered with a non-success status
    #[error("Authority responded with status {0}")]
    AuthorityStatus(u16),

    /// The authority answered 2xx with a body we could not read
    #[error("Malformed authority response: {0}")]
    MalformedResponse(String),

    /// The route did not carry a usable username
    #[error("Invalid route username")]
    InvalidRoute,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionMissing | AuthError::Rejected => ErrorKind::Unauthorized,
            AuthError::AuthorityUnreachable(_) => ErrorKind::ServiceUnavailable,
            AuthError::AuthorityStatus(_) | AuthError::MalformedResponse(_) => {
                ErrorKind::BadGateway
            }
            AuthError::InvalidRoute => ErrorKind::NotFound,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether the failure came from the authority rather than the caller.
    pub fn is_authority_failure(&self) -> bool {
        matches!(
            self,
            AuthError::AuthorityUnreachable(_)
                | AuthError::AuthorityStatus(_)
                | AuthError::MalformedResponse(_)
        )
    }

    /// Convert to AppError.
    ///
    /// Messages are generic. Authority error bodies and transport details
    /// only ever reach the logs.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::Unauthorized => AppError::unauthorized("Not signed in"),
            ErrorKind::NotFound => AppError::not_found("Page not found"),
            ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Sign-in service unavailable")
            }
            ErrorKind::BadGateway => AppError::bad_gateway("Sign-in service unavailable"),
            _ => AppError::internal("Internal error"),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::AuthorityUnreachable(e) => {
                tracing::error!(error = %e, "Session authority unreachable");
            }
            AuthError::AuthorityStatus(status) => {
                tracing::warn!(status = *status, "Session authority returned non-success");
            }
            AuthError::MalformedResponse(msg) => {
                tracing::warn!(message = %msg, "Session authority returned malformed body");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
