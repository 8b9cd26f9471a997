//! Application Layer

pub mod available_time_slots;
pub mod config;

// Re-exports
pub use available_time_slots::AvailableTimeSlotsUseCase;
pub use config::BookingConfig;
