//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BookingAppState;
pub use router::booking_router;
