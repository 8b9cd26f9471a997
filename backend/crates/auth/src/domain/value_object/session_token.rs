//! Session Token Value Object
//!
//! Opaque credential carried in the `auth_token` cookie. Created at login by
//! the authority, read here, never mutated. The value is never printed:
//! `Debug` is redacted and there is no `Display`.

use std::fmt;

use axum::http::HeaderMap;

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Accept a raw cookie value.
    ///
    /// Empty values and values that cannot be forwarded inside a `Cookie`
    /// header (separators, control characters, whitespace) are refused.
    pub fn parse<S: AsRef<str>>(raw: S) -> Option<Self> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return None;
        }

        let forwardable = raw
            .chars()
            .all(|c| c.is_ascii_graphic() && c != ';' && c != ',');

        forwardable.then(|| Self {
            value: raw.to_string(),
        })
    }

    /// Read the token from the request cookies.
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Self> {
        platform::cookie::extract_cookie(headers, cookie_name).and_then(Self::parse)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}
