//! Domain Entities
//!
//! Read-only views of the booking API's records. Fields the API adds beyond
//! these are carried in `extra` and passed through untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub people_count: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A bookable time slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimeSlot {
    /// `start-end`, or whichever bound is known
    pub fn label(&self) -> String {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => format!("{start}-{end}"),
            (Some(start), None) => start.clone(),
            (None, Some(end)) => format!("until {end}"),
            (None, None) => self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_from_api_payload() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":"7","name":"Tanaka","date":"2026-03-14","time":"19:00","peopleCount":4,"status":"confirmed"}"#,
        )
        .unwrap();

        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(booking.people_count, Some(4));
        assert_eq!(booking.extra.get("status"), Some(&Value::from("confirmed")));
    }

    #[test]
    fn test_time_slot_label() {
        let slot: TimeSlot =
            serde_json::from_str(r#"{"id":"s1","startTime":"18:00","endTime":"19:30"}"#).unwrap();
        assert_eq!(slot.label(), "18:00-19:30");

        let bare: TimeSlot = serde_json::from_str(r#"{"id":"s2"}"#).unwrap();
        assert_eq!(bare.label(), "s2");
    }
}
