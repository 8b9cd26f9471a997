//! Value Object Module

pub mod route_user;
pub mod session_token;
pub mod user_role;
