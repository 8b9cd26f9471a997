//! RFC 7807 problem details
//!
//! Body shape of every error response:
//! `{ type, title, status, code, detail, action? }`.

use serde::Serialize;

use super::app_error::AppError;
use super::kind::ErrorKind;

#[derive(Debug, Serialize)]
pub struct Problem<'a> {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub code: ErrorKind,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
}

impl<'a> From<&'a AppError> for Problem<'a> {
    fn from(err: &'a AppError) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", err.status_code()),
            title: err.kind().as_str(),
            status: err.status_code(),
            code: err.kind(),
            detail: err.message(),
            action: err.action(),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(Problem::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_body() {
        let err = AppError::bad_gateway("Booking service unavailable");
        let body = serde_json::to_value(Problem::from(&err)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "type": "https://httpstatuses.io/502",
                "title": "Bad Gateway",
                "status": 502,
                "code": "BAD_GATEWAY",
                "detail": "Booking service unavailable",
            })
        );
    }

    #[test]
    fn test_problem_body_with_action() {
        let err = AppError::bad_request("invalid date").with_action("Use YYYY-MM-DD");
        let body = serde_json::to_value(Problem::from(&err)).unwrap();
        assert_eq!(body["action"], "Use YYYY-MM-DD");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_problem_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::not_found("Page not found").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
