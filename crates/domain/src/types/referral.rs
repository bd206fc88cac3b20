//! How a signup heard about the waitlist.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Referral source picked on the signup form.
///
/// Wire values are the lowercase variant names. Parsing is exact: `"Twitter"`
/// or `"facebook"` are not referral sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralSource {
    /// X/Twitter
    Twitter,
    Newsletter,
    Friend,
    Other,
}

impl ReferralSource {
    /// All referral sources in form order.
    pub fn all() -> &'static [ReferralSource] {
        &[
            ReferralSource::Twitter,
            ReferralSource::Newsletter,
            ReferralSource::Friend,
            ReferralSource::Other,
        ]
    }

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralSource::Twitter => "twitter",
            ReferralSource::Newsletter => "newsletter",
            ReferralSource::Friend => "friend",
            ReferralSource::Other => "other",
        }
    }
}

impl fmt::Display for ReferralSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferralSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferralSource::all()
            .iter()
            .copied()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown referral source: {}", s)))
    }
}
