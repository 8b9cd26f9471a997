//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::authorization::Session;
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Logout
// ============================================================================

/// Logout response
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self {
            message: "Logged out successfully",
        }
    }
}

// ============================================================================
// Session State
// ============================================================================

/// Session state query
#[derive(Debug, Clone, Deserialize)]
pub struct SessionQuery {
    pub username: Option<String>,
}

/// Session state response: `{ authorized, role?, username? }`
///
/// Only the role and username reach the browser; anything else the
/// authority attached to the session stays server-side.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStateResponse {
    pub authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SessionStateResponse {
    pub fn unauthorized() -> Self {
        Self {
            authorized: false,
            role: None,
            username: None,
        }
    }

    pub fn authorized(session: Session) -> Self {
        Self {
            authorized: true,
            role: Some(session.role),
            username: Some(session.username),
        }
    }
}
