//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only as long as the process:
//! - `SubmissionStore` - waitlist submissions, unique by email

pub mod submission;

pub use submission::SubmissionStore;
