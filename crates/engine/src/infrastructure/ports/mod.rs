//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Submission storage (the in-memory store today)
//! - Clock (for testing)

mod repos;
mod testing;

pub use repos::*;
pub use testing::*;
