use serde::{Deserialize, Serialize};
use std::fmt;

/// Role reported by the session authority.
///
/// The authority owns the role vocabulary. Codes we do not know are kept
/// verbatim and are never privileged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    Other(String),
}

impl UserRole {
    #[inline]
    pub fn code(&self) -> &str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Other(code) => code,
        }
    }

    /// Only `admin` is privileged. Matching is exact, `"Admin"` is not.
    #[inline]
    pub const fn is_privileged(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            other => {
                tracing::debug!(role = %other, "Unrecognised role code");
                UserRole::Other(other.to_string())
            }
        }
    }
}

impl From<String> for UserRole {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
