//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie parsing and `Set-Cookie` deletion values
//! - Outbound HTTP client construction for upstream services

pub mod cookie;
pub mod http_client;
