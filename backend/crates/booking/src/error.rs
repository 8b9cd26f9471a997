//! Booking Error Types
//!
//! Failures of the GraphQL booking API, mapped onto the unified
//! `kernel::error::AppError` for responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Booking-specific result type alias
pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    /// Transport failure (connect error, timeout, reset)
    #[error("Booking API unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Non-success HTTP status from the GraphQL endpoint
    #[error("Booking API responded with status {0}")]
    Status(u16),

    /// The response carried GraphQL `errors`
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// 2xx with a body that is not a usable GraphQL response
    #[error("Malformed booking API response: {0}")]
    MalformedResponse(String),

    /// A query argument could not be parsed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::InvalidArgument(_) => ErrorKind::BadRequest,
            _ => ErrorKind::BadGateway,
        }
    }

    /// Convert to AppError. Upstream detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            BookingError::InvalidArgument(msg) => AppError::bad_request(msg.clone())
                .with_action("Use date=YYYY-MM-DD and a positive peopleCount"),
            _ => AppError::bad_gateway("Booking service unavailable"),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            BookingError::Unreachable(e) => {
                tracing::error!(error = %e, "Booking API unreachable");
            }
            BookingError::Status(status) => {
                tracing::warn!(status = *status, "Booking API returned non-success");
            }
            BookingError::GraphQl(msg) => {
                tracing::warn!(message = %msg, "Booking API returned GraphQL errors");
            }
            BookingError::MalformedResponse(msg) => {
                tracing::warn!(message = %msg, "Booking API returned malformed body");
            }
            BookingError::InvalidArgument(msg) => {
                tracing::debug!(message = %msg, "Rejected booking query argument");
            }
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
