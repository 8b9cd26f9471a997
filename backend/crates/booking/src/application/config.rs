//! Booking API configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// GraphQL endpoint of the booking API
    pub graphql_url: String,
    /// Timeout for one query. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:4000/graphql".to_string(),
            request_timeout: None,
        }
    }
}
