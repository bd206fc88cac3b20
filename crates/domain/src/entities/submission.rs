//! Submission entity - one person's waitlist entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ReferralSource;
use crate::value_objects::{EmailAddress, Interest};

/// A waitlist entry, identified by its email.
///
/// `created_at` is fixed when the entry is first recorded; `updated_at` moves
/// on every revision. The email never changes once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    email: EmailAddress,
    interest: Interest,
    referral: ReferralSource,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Submission {
    /// New entry with `created_at == updated_at == now`.
    pub fn new(
        email: EmailAddress,
        interest: Interest,
        referral: ReferralSource,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            interest,
            referral,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the answers of an existing entry, keeping its identity and
    /// creation time.
    pub fn revise(&mut self, interest: Interest, referral: ReferralSource, now: DateTime<Utc>) {
        self.interest = interest;
        self.referral = referral;
        self.updated_at = now;
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn interest(&self) -> &Interest {
        &self.interest
    }

    pub fn referral(&self) -> ReferralSource {
        self.referral
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
