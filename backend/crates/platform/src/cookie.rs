//! Cookie Management Infrastructure
//!
//! Parsing of the inbound `Cookie` header and construction of `Set-Cookie`
//! values for the session cookies.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of a single cookie
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "auth_token".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header that expires the cookie immediately.
    ///
    /// Carries the same `Secure`/`SameSite` attributes as the cookie being
    /// cleared; browsers ignore deletions that downgrade them.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}=", self.name);
        self.push_attributes(&mut cookie);
        cookie.push_str("; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
        cookie
    }

    fn push_attributes(&self, cookie: &mut String) {
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));
    }
}

/// Extract a cookie value from headers.
///
/// All `Cookie` headers are searched. An empty value is reported as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// `name=value` pair for an outbound `Cookie` request header.
pub fn cookie_pair(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}

/// Convert a built cookie string into a header value.
///
/// Returns `None` for values containing bytes not allowed in headers.
pub fn set_cookie_header(cookie: &str) -> Option<HeaderValue> {
    match HeaderValue::from_str(cookie) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "Refusing to emit invalid Set-Cookie value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_cookie_follows_config() {
        let config = CookieConfig {
            name: "test".to_string(),
            secure: false,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/api".to_string(),
        };

        let cookie = config.build_delete_cookie();
        assert!(cookie.starts_with("test=;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/api"));
    }

    #[test]
    fn test_delete_cookie_keeps_security_attributes() {
        let config = CookieConfig {
            name: "username".to_string(),
            ..Default::default()
        };
        let cookie = config.build_delete_cookie();
        assert!(cookie.starts_with("username=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; auth_token=abc123; username=alice"),
        );

        assert_eq!(
            extract_cookie(&headers, "auth_token"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "username"), Some("alice".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_empty_value_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("auth_token="));

        assert_eq!(extract_cookie(&headers, "auth_token"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("foo=bar"));
        headers.append(header::COOKIE, HeaderValue::from_static("auth_token=t0k"));

        assert_eq!(extract_cookie(&headers, "auth_token"), Some("t0k".to_string()));
    }

    #[test]
    fn test_set_cookie_header_rejects_newlines() {
        assert!(set_cookie_header("a=b\r\nInjected: yes").is_none());
        assert!(set_cookie_header("a=b; Path=/").is_some());
    }
}
