//! Infrastructure Layer
//!
//! Adapters for the external session authority.

pub mod http_authority;
