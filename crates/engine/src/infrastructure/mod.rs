//! Infrastructure implementations.
//!
//! Contains port traits, the system clock, and environment configuration.

pub mod clock;
pub mod config;
pub mod ports;
