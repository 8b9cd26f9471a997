//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the page guard middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{PageGuardState, PageSession, require_page_access};
pub use router::auth_router;
