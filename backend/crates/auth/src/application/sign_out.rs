//! Sign Out Use Case
//!
//! Ends the browser session by expiring both session cookies. The authority
//! is not involved, so this succeeds whether or not anyone is signed in.

use std::sync::Arc;

use crate::application::config::AuthConfig;

/// Sign out output
pub struct SignOutOutput {
    /// `Set-Cookie` values, one per cleared cookie
    pub cleared_cookies: Vec<String>,
}

/// Sign out use case
pub struct SignOutUseCase {
    config: Arc<AuthConfig>,
}

impl SignOutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> SignOutOutput {
        let cleared_cookies = vec![
            self.config.session_cookie().build_delete_cookie(),
            self.config.username_cookie().build_delete_cookie(),
        ];

        tracing::info!("User signed out");

        SignOutOutput { cleared_cookies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clears_token_and_username() {
        let use_case = SignOutUseCase::new(Arc::new(AuthConfig::default()));
        let output = use_case.execute();

        assert_eq!(output.cleared_cookies.len(), 2);
        assert!(output.cleared_cookies[0].starts_with("auth_token=;"));
        assert!(output.cleared_cookies[1].starts_with("username=;"));
        for cookie in &output.cleared_cookies {
            assert!(cookie.contains("Max-Age=0"));
            assert!(cookie.contains("Path=/"));
            assert!(cookie.contains("HttpOnly"));
            assert!(cookie.contains("Secure"));
            assert!(cookie.contains("SameSite=Strict"));
        }
    }

    #[test]
    fn test_repeatable() {
        let use_case = SignOutUseCase::new(Arc::new(AuthConfig::default()));
        let first = use_case.execute();
        let second = use_case.execute();
        assert_eq!(first.cleared_cookies, second.cleared_cookies);
    }
}
