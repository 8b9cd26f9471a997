//! Booking Source
//!
//! Interface to the booking data. Implemented over GraphQL in `infra`.

use crate::domain::entities::{Booking, TimeSlot};
use crate::domain::value_objects::AvailabilityQuery;
use crate::error::BookingResult;

#[trait_variant::make(BookingSource: Send)]
pub trait LocalBookingSource {
    /// `allBooking`
    async fn all_bookings(&self) -> BookingResult<Vec<Booking>>;

    /// `availableTimeSlots(date, peopleCount)`
    async fn available_time_slots(&self, query: AvailabilityQuery) -> BookingResult<Vec<TimeSlot>>;

    /// `allTimeSlots`
    async fn all_time_slots(&self) -> BookingResult<Vec<TimeSlot>>;
}
