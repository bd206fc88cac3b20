//! Email address newtype.
//!
//! The check is deliberately shallow: a `local@domain.tld` shape where no part
//! contains whitespace or a second `@`. No RFC 5322 parsing and no case
//! normalization, so `Ann@Example.com` and `ann@example.com` are distinct.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

static EMAIL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// An email address with a `local@domain.tld` shape, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value does not look like
    /// `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        if !Self::is_well_formed(&email) {
            return Err(DomainError::validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(Self(email))
    }

    /// Shape check without allocating.
    pub fn is_well_formed(email: &str) -> bool {
        EMAIL_SHAPE_RE.is_match(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> String {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
