//! Value Objects

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{BookingError, BookingResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Arguments of `availableTimeSlots`. Only exists when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub people_count: u32,
}

impl AvailabilityQuery {
    pub fn new(date: NaiveDate, people_count: u32) -> BookingResult<Self> {
        if people_count == 0 {
            return Err(BookingError::InvalidArgument(
                "peopleCount must be positive".to_string(),
            ));
        }
        Ok(Self { date, people_count })
    }

    /// `Ok(None)` when either argument is missing or blank.
    pub fn from_raw(date: Option<&str>, people_count: Option<&str>) -> BookingResult<Option<Self>> {
        let date = date.map(str::trim).filter(|s| !s.is_empty());
        let people_count = people_count.map(str::trim).filter(|s| !s.is_empty());

        let (Some(date), Some(people_count)) = (date, people_count) else {
            return Ok(None);
        };

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| BookingError::InvalidArgument(format!("invalid date: {date}")))?;
        let people_count = people_count.parse::<u32>().map_err(|_| {
            BookingError::InvalidArgument(format!("invalid peopleCount: {people_count}"))
        })?;

        Self::new(date, people_count).map(Some)
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let query = AvailabilityQuery::from_raw(Some("2026-03-14"), Some("2"))
            .unwrap()
            .unwrap();
        assert_eq!(query.people_count, 2);
        assert_eq!(query.date_string(), "2026-03-14");
    }

    #[test]
    fn test_missing_argument_is_none() {
        assert_eq!(AvailabilityQuery::from_raw(None, Some("2")).unwrap(), None);
        assert_eq!(AvailabilityQuery::from_raw(Some("2026-03-14"), None).unwrap(), None);
        assert_eq!(AvailabilityQuery::from_raw(Some(""), Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            AvailabilityQuery::from_raw(Some("14/03/2026"), Some("2")),
            Err(BookingError::InvalidArgument(_))
        ));
        assert!(matches!(
            AvailabilityQuery::from_raw(Some("2026-03-14"), Some("two")),
            Err(BookingError::InvalidArgument(_))
        ));
        assert!(matches!(
            AvailabilityQuery::from_raw(Some("2026-03-14"), Some("0")),
            Err(BookingError::InvalidArgument(_))
        ));
    }
}
