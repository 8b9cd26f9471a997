//! Booking Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::source::BookingSource;
use crate::presentation::handlers::{self, BookingAppState};

/// Create the time-slot router for any booking source
pub fn booking_router<S>(source: Arc<S>) -> Router
where
    S: BookingSource + Send + Sync + 'static,
{
    let state = BookingAppState { source };

    Router::new()
        .route("/", get(handlers::all_time_slots::<S>))
        .route("/available", get(handlers::available_time_slots::<S>))
        .with_state(state)
}
