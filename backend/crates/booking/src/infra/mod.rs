//! Infrastructure Layer

pub mod graphql;

pub use graphql::GraphQlBookingClient;
