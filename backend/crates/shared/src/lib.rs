//! Shared Kernel - Domain-crossing minimal core
//!
//! The vocabulary every crate in the workspace agrees on:
//! - The unified error type and its result alias
//! - Error kinds and their HTTP status mapping
//! - RFC 7807 problem rendering (`axum` feature)
//!
//! Only things with a stable meaning across the auth gate, the booking
//! data layer and the web application belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod problem;
}
