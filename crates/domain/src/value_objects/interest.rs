//! Free-text interest given by a signup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length after trimming, in UTF-16 code units.
pub const MIN_INTEREST_CHARS: usize = 5;

/// Trimmed interest text, at least `MIN_INTEREST_CHARS` UTF-16 code units long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interest(String);

impl Interest {
    /// Create a new interest from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if fewer than `MIN_INTEREST_CHARS`
    /// UTF-16 code units remain after trimming, the length a browser form reports.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.encode_utf16().count() < MIN_INTEREST_CHARS {
            return Err(DomainError::validation(format!(
                "Interest must be at least {} characters",
                MIN_INTEREST_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Interest {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Interest> for String {
    fn from(interest: Interest) -> String {
        interest.0
    }
}
