//! Entities

pub mod authorization;
