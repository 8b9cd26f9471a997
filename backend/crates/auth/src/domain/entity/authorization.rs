//! Authorization Entity
//!
//! The authority's answer to a login-auth check, and the [`Session`] it
//! becomes once the answer is positive. Neither is persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_object::user_role::UserRole;

/// Raw authority payload: `{ authorized, role, username, ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Authorization {
    #[serde(default)]
    pub authorized: bool,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub username: String,
    /// Any further fields the authority sends along
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Authorization {
    /// `None` unless the authority said `authorized: true`.
    pub fn into_session(self) -> Option<Session> {
        if !self.authorized {
            return None;
        }

        Some(Session {
            role: self.role,
            username: self.username,
            extra: self.extra,
        })
    }
}

/// An authorized session. Only obtainable through
/// [`Authorization::into_session`] (or [`Session::new`] in tests and
/// adapters that already verified the payload).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub role: UserRole,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(role: UserRole, username: impl Into<String>) -> Self {
        Self {
            role,
            username: username.into(),
            extra: Map::new(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_privileged()
    }
}
