//! Domain Layer
//!
//! Bookings and time slots as the booking API returns them, and the
//! source interface that fetches them.

pub mod entities;
pub mod source;
pub mod value_objects;

// Re-exports
pub use entities::{Booking, TimeSlot};
pub use source::{BookingSource, LocalBookingSource};
pub use value_objects::AvailabilityQuery;
