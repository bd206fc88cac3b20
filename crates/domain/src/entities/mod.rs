//! Domain entities.

mod submission;

pub use submission::Submission;
