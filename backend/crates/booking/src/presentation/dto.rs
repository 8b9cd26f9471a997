//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::entities::TimeSlot;

/// Query string of `GET /api/time-slots/available`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableQuery {
    pub date: Option<String>,
    pub people_count: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimeSlotsResponse {
    /// True when the query was not sent for lack of arguments
    pub skipped: bool,
    pub slots: Vec<TimeSlot>,
}

impl TimeSlotsResponse {
    pub fn fetched(slots: Vec<TimeSlot>) -> Self {
        Self {
            skipped: false,
            slots,
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: true,
            slots: Vec::new(),
        }
    }
}
