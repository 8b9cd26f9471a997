//! Route User Value Object
//!
//! The username embedded in a page path (`/{username}/dashboard`): whose
//! page is being requested. Compared against the session username verbatim.

use derive_more::Display;
use serde::Serialize;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{value}")]
pub struct RouteUser {
    value: String,
}

impl RouteUser {
    /// Blank segments are refused; the caller renders not-found for them.
    pub fn parse<S: AsRef<str>>(segment: S) -> AuthResult<Self> {
        let segment = segment.as_ref();
        if segment.trim().is_empty() {
            return Err(AuthError::InvalidRoute);
        }

        Ok(Self {
            value: segment.to_string(),
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for RouteUser {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_segment_verbatim() {
        let user = RouteUser::parse("Alice").unwrap();
        assert_eq!(user.as_str(), "Alice");
        assert_eq!(user.to_string(), "Alice");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(RouteUser::parse(""), Err(AuthError::InvalidRoute)));
        assert!(matches!(RouteUser::parse("   "), Err(AuthError::InvalidRoute)));
    }
}
