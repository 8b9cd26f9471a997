//! Booking Data Module
//!
//! Read-only access to the external GraphQL booking API:
//! - `domain/` - Booking and time slot records, the source trait
//! - `application/` - Skip-aware availability lookup, configuration
//! - `infra/` - GraphQL client over reqwest
//! - `presentation/` - Time-slot pass-through endpoints
//!
//! No booking logic runs here. Allocation and availability are decided by
//! the API; this crate fetches and relays.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BookingConfig;
pub use domain::{AvailabilityQuery, Booking, BookingSource, TimeSlot};
pub use error::{BookingError, BookingResult};
pub use infra::graphql::GraphQlBookingClient;
pub use presentation::router::booking_router;
