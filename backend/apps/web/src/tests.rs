//! Route-level tests for the assembled application

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use auth::domain::SessionAuthority;
    use auth::models::{Authorization, RouteUser, SessionToken};
    use auth::{AuthConfig, AuthError, AuthResult};
    use axum::Router;
    use booking::{AvailabilityQuery, Booking, BookingResult, BookingSource, TimeSlot};
    use serde_json::json;

    use crate::app::build_router;

    #[derive(Clone)]
    pub struct StubAuthority {
        sessions: Arc<HashMap<&'static str, Authorization>>,
    }

    impl Default for StubAuthority {
        fn default() -> Self {
            let session = |role: &str, username: &str| -> Authorization {
                serde_json::from_value(json!({
                    "authorized": true,
                    "role": role,
                    "username": username,
                }))
                .unwrap()
            };

            let sessions = HashMap::from([
                ("admin-token", session("admin", "root")),
                ("alice-token", session("user", "alice")),
                ("bob-token", session("user", "bob")),
            ]);

            Self {
                sessions: Arc::new(sessions),
            }
        }
    }

    impl SessionAuthority for StubAuthority {
        async fn check_login_auth(
            &self,
            token: &SessionToken,
            _username: &RouteUser,
        ) -> AuthResult<Authorization> {
            match token.as_str() {
                "outage-token" => Err(AuthError::AuthorityStatus(500)),
                other => self
                    .sessions
                    .get(other)
                    .cloned()
                    .ok_or(AuthError::AuthorityStatus(401)),
            }
        }
    }

    #[derive(Clone, Default)]
    pub struct StubBookings;

    impl BookingSource for StubBookings {
        async fn all_bookings(&self) -> BookingResult<Vec<Booking>> {
            Ok(vec![
                serde_json::from_value(json!({
                    "id": "b1",
                    "name": "Tanaka <VIP>",
                    "date": "2026-03-14",
                    "time": "19:00",
                    "peopleCount": 4,
                }))
                .unwrap(),
            ])
        }

        async fn available_time_slots(
            &self,
            _query: AvailabilityQuery,
        ) -> BookingResult<Vec<TimeSlot>> {
            Ok(Vec::new())
        }

        async fn all_time_slots(&self) -> BookingResult<Vec<TimeSlot>> {
            Ok(vec![
                serde_json::from_value(json!({
                    "id": "s1",
                    "startTime": "18:00",
                    "endTime": "19:30",
                    "capacity": 6,
                }))
                .unwrap(),
            ])
        }
    }

    pub fn app_with(config: AuthConfig) -> Router {
        build_router(
            Arc::new(StubAuthority::default()),
            Arc::new(StubBookings),
            config,
        )
    }

    pub fn app() -> Router {
        app_with(AuthConfig::default())
    }
}

#[cfg(test)]
mod route_tests {
    use auth::AuthConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::Router;
    use tower::ServiceExt;

    use super::support::*;

    async fn send(app: Router, uri: &str, token: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(token) = token {
            request = request.header(header::COOKIE, format!("username=x; auth_token={token}"));
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_requires_session() {
        let response = send(app(), "/alice/dashboard", None).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/404");
    }

    #[tokio::test]
    async fn test_dashboard_renders_for_admin() {
        let response = send(app(), "/alice/dashboard", Some("admin-token")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Dashboard: alice"));
        assert!(html.contains("Tanaka &lt;VIP&gt;"));
        assert!(html.contains("2026-03-14"));
    }

    #[tokio::test]
    async fn test_dashboard_refuses_non_admin_owner() {
        let response = send(app(), "/alice/dashboard", Some("alice-token")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_dashboard_fails_closed_on_authority_error() {
        let response = send(app(), "/alice/dashboard", Some("outage-token")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/404");
    }

    #[tokio::test]
    async fn test_dashboard_redirects_to_configured_path() {
        let config = AuthConfig {
            not_found_path: "/missing".to_string(),
            ..Default::default()
        };

        let response = send(app_with(config.clone()), "/alice/dashboard", None).await;
        assert_eq!(location(&response), "/missing");

        let page = send(app_with(config), "/missing", None).await;
        assert_eq!(page.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tables_without_cookie_is_not_found() {
        let response = send(app(), "/alice/tables", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tables_for_owner() {
        let response = send(app(), "/alice/tables", Some("alice-token")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Tables: alice"));
        assert!(html.contains("18:00-19:30"));
    }

    #[tokio::test]
    async fn test_tables_for_other_user_is_not_found() {
        let response = send(app(), "/alice/tables", Some("bob-token")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tables_when_authority_fails_is_not_found() {
        let response = send(app(), "/alice/tables", Some("outage-token")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!body_text(response).await.contains("18:00-19:30"));
    }

    #[tokio::test]
    async fn test_tables_with_unknown_token_is_not_found() {
        let response = send(app(), "/alice/tables", Some("forged-token")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tables_for_admin() {
        let response = send(app(), "/alice/tables", Some("admin-token")).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_found_pages() {
        assert_eq!(send(app(), "/404", None).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(app(), "/no/such/page", None).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_logout_clears_cookies() {
        let response = send(app(), "/api/auth/logout", Some("alice-token")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 2);
        assert!(body_text(response).await.contains("Logged out successfully"));
    }

    #[tokio::test]
    async fn test_session_endpoint() {
        let response = send(app(), "/api/auth/session?username=alice", Some("bob-token")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, serde_json::json!({"authorized": false}));

        let missing = send(app(), "/api/auth/session", Some("alice-token")).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_time_slot_endpoints() {
        let all = send(app(), "/api/time-slots", None).await;
        assert_eq!(all.status(), StatusCode::OK);
        assert!(body_text(all).await.contains("\"startTime\":\"18:00\""));

        let skipped = send(app(), "/api/time-slots/available?peopleCount=2", None).await;
        let body: serde_json::Value = serde_json::from_str(&body_text(skipped).await).unwrap();
        assert_eq!(body, serde_json::json!({"skipped": true, "slots": []}));
    }
}
