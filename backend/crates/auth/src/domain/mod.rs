//! Domain Layer
//!
//! Session vocabulary, the access policy, and the authority interface.

pub mod authority;
pub mod entity;
pub mod policy;
pub mod value_object;

// Re-exports
pub use authority::{LocalSessionAuthority, SessionAuthority};
pub use entity::authorization::{Authorization, Session};
pub use policy::{AccessPolicy, is_admin_or_self};
pub use value_object::{route_user::RouteUser, session_token::SessionToken, user_role::UserRole};
