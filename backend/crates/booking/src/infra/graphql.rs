//! GraphQL Booking Client
//!
//! `POST {graphql_url}` with `{ query, variables }`; the answer is the usual
//! `{ data, errors }` envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use platform::http_client::HttpClientConfig;

use crate::application::config::BookingConfig;
use crate::domain::entities::{Booking, TimeSlot};
use crate::domain::source::BookingSource;
use crate::domain::value_objects::AvailabilityQuery;
use crate::error::{BookingError, BookingResult};

pub const ALL_BOOKING_QUERY: &str = "query AllBooking {
  allBooking { id name date time peopleCount }
}";

pub const AVAILABLE_TIME_SLOTS_QUERY: &str =
    "query AvailableTimeSlots($date: String!, $peopleCount: Int!) {
  availableTimeSlots(date: $date, peopleCount: $peopleCount) { id startTime endTime capacity }
}";

pub const ALL_TIME_SLOTS_QUERY: &str = "query AllTimeSlots {
  allTimeSlots { id startTime endTime capacity }
}";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllBookingData {
    all_booking: Vec<Booking>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailableTimeSlotsData {
    available_time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AllTimeSlotsData {
    all_time_slots: Vec<TimeSlot>,
}

/// Booking source backed by the GraphQL API
#[derive(Clone)]
pub struct GraphQlBookingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlBookingClient {
    pub fn new(config: &BookingConfig) -> BookingResult<Self> {
        let http = HttpClientConfig::default()
            .with_request_timeout(config.request_timeout)
            .build()
            .map_err(BookingError::Unreachable)?;

        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &BookingConfig) -> Self {
        Self {
            http,
            endpoint: config.graphql_url.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> BookingResult<T> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(BookingError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(BookingError::Unreachable)?;

        parse_response(&body)
    }
}

impl BookingSource for GraphQlBookingClient {
    async fn all_bookings(&self) -> BookingResult<Vec<Booking>> {
        let data: AllBookingData = self.execute(ALL_BOOKING_QUERY, json!({})).await?;
        Ok(data.all_booking)
    }

    async fn available_time_slots(&self, query: AvailabilityQuery) -> BookingResult<Vec<TimeSlot>> {
        let variables = json!({
            "date": query.date_string(),
            "peopleCount": query.people_count,
        });
        let data: AvailableTimeSlotsData =
            self.execute(AVAILABLE_TIME_SLOTS_QUERY, variables).await?;
        Ok(data.available_time_slots)
    }

    async fn all_time_slots(&self) -> BookingResult<Vec<TimeSlot>> {
        let data: AllTimeSlotsData = self.execute(ALL_TIME_SLOTS_QUERY, json!({})).await?;
        Ok(data.all_time_slots)
    }
}

fn parse_response<T: DeserializeOwned>(body: &str) -> BookingResult<T> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| BookingError::MalformedResponse(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(BookingError::GraphQl(messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| BookingError::MalformedResponse("response has no data".to_string()))
}
