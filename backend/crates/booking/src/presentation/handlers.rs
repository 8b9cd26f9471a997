//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::AvailableTimeSlotsUseCase;
use crate::domain::source::BookingSource;
use crate::domain::value_objects::AvailabilityQuery;
use crate::error::BookingResult;
use crate::presentation::dto::{AvailableQuery, TimeSlotsResponse};

/// Shared state for booking handlers
pub struct BookingAppState<S>
where
    S: BookingSource + Send + Sync + 'static,
{
    pub source: Arc<S>,
}

impl<S> Clone for BookingAppState<S>
where
    S: BookingSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

/// GET /api/time-slots
pub async fn all_time_slots<S>(
    State(state): State<BookingAppState<S>>,
) -> BookingResult<Json<TimeSlotsResponse>>
where
    S: BookingSource + Send + Sync + 'static,
{
    let slots = state.source.all_time_slots().await?;
    Ok(Json(TimeSlotsResponse::fetched(slots)))
}

/// GET /api/time-slots/available?date=YYYY-MM-DD&peopleCount=N
pub async fn available_time_slots<S>(
    State(state): State<BookingAppState<S>>,
    Query(query): Query<AvailableQuery>,
) -> BookingResult<Json<TimeSlotsResponse>>
where
    S: BookingSource + Send + Sync + 'static,
{
    let query =
        AvailabilityQuery::from_raw(query.date.as_deref(), query.people_count.as_deref())?;

    let response = match AvailableTimeSlotsUseCase::new(state.source.clone())
        .execute(query)
        .await?
    {
        Some(slots) => TimeSlotsResponse::fetched(slots),
        None => TimeSlotsResponse::skipped(),
    };

    Ok(Json(response))
}
