//! Waitlist Engine library.
//!
//! This crate contains all server-side code for the waitlist service.
//!
//! ## Structure
//!
//! - `stores/` - In-memory submission store (the only state)
//! - `use_cases/` - Signup validation and admin search/export
//! - `infrastructure/` - Ports, clock, and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
