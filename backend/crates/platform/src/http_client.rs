//! Outbound HTTP client
//!
//! One `reqwest::Client` per upstream service. Every request carries
//! `Cache-Control: no-store` so that no intermediary answers an
//! authorization check from cache.

use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue, header};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("booking-web/", env!("CARGO_PKG_VERSION"));

/// Settings for an upstream client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout. `None` waits for the upstream indefinitely.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

impl HttpClientConfig {
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(self.connect_timeout);

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_request_timeout() {
        let config = HttpClientConfig::default();
        assert!(config.request_timeout.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_request_timeout() {
        let config = HttpClientConfig::default().with_request_timeout(Some(Duration::from_secs(3)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_build_client() {
        assert!(HttpClientConfig::default().build().is_ok());
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://authority:4000/", "/api/auth/check-login-auth"),
            "http://authority:4000/api/auth/check-login-auth"
        );
        assert_eq!(join_url("http://a", "graphql"), "http://a/graphql");
    }
}
