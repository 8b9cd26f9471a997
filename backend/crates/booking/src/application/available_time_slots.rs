//! Available Time Slots Use Case
//!
//! `availableTimeSlots` only runs once both the date and the party size
//! are known. Until then the query is skipped and no request is made.

use std::sync::Arc;

use crate::domain::entities::TimeSlot;
use crate::domain::source::BookingSource;
use crate::domain::value_objects::AvailabilityQuery;
use crate::error::BookingResult;

pub struct AvailableTimeSlotsUseCase<S>
where
    S: BookingSource + Send + Sync + 'static,
{
    source: Arc<S>,
}

impl<S> AvailableTimeSlotsUseCase<S>
where
    S: BookingSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// `Ok(None)` means skipped.
    pub async fn execute(
        &self,
        query: Option<AvailabilityQuery>,
    ) -> BookingResult<Option<Vec<TimeSlot>>> {
        let Some(query) = query else {
            tracing::debug!("availableTimeSlots skipped, arguments incomplete");
            return Ok(None);
        };

        let slots = self.source.available_time_slots(query).await?;

        tracing::debug!(
            date = %query.date,
            people_count = query.people_count,
            slots = slots.len(),
            "Fetched available time slots"
        );

        Ok(Some(slots))
    }
}
