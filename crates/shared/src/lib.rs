//! Waitlist Protocol - Wire types for the submissions HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient requests** - Request fields are optional so the engine can
//!    answer each missing or malformed field with its own message

pub mod requests;
pub mod responses;

pub use requests::{SubmissionSearchQuery, SubmitSubmissionRequest};
pub use responses::{DataResponse, ErrorResponse};
