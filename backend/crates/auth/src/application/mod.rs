//! Application Layer
//!
//! Use cases: the login-auth check, the two guards built on it, and sign-out.

pub mod check_login_auth;
pub mod client_guard;
pub mod config;
pub mod server_guard;
pub mod sign_out;

// Re-exports
pub use check_login_auth::CheckLoginAuthUseCase;
pub use client_guard::{ClientGuard, GuardState, PageView};
pub use config::AuthConfig;
pub use server_guard::{Denial, ServerGuard};
pub use sign_out::{SignOutOutput, SignOutUseCase};
