//! Waitlist domain types.
//!
//! - `entities/` - the `Submission` record kept by the store
//! - `value_objects/` - validated email and interest text
//! - `types/` - shared vocabulary enums (referral source)

pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;

pub use entities::Submission;
pub use error::DomainError;
pub use types::ReferralSource;
pub use value_objects::{EmailAddress, Interest, MIN_INTEREST_CHARS};
