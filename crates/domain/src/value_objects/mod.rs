//! Value objects - Immutable objects defined by their attributes

mod email;
mod interest;

pub use email::EmailAddress;
pub use interest::{Interest, MIN_INTEREST_CHARS};
