//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie holding the session token
    pub session_cookie_name: String,
    /// Cookie holding the display username
    pub username_cookie_name: String,
    /// Base URL of the session authority
    pub authority_url: String,
    /// Timeout for one authority call. `None` waits indefinitely.
    pub authority_timeout: Option<Duration>,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Where denied page requests are redirected
    pub not_found_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "auth_token".to_string(),
            username_cookie_name: "username".to_string(),
            authority_url: "http://localhost:4000".to_string(),
            authority_timeout: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            not_found_path: "/404".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Attributes of the session token cookie
    pub fn session_cookie(&self) -> CookieConfig {
        self.cookie(&self.session_cookie_name)
    }

    /// Attributes of the username cookie
    pub fn username_cookie(&self) -> CookieConfig {
        self.cookie(&self.username_cookie_name)
    }

    fn cookie(&self, name: &str) -> CookieConfig {
        CookieConfig {
            name: name.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}
