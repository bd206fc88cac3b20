//! Repository port traits for submission storage.

use async_trait::async_trait;
use waitlist_domain::{EmailAddress, Interest, ReferralSource, Submission};

// =============================================================================
// Submission Storage
// =============================================================================

/// Unique-by-email collection of waitlist submissions.
///
/// Both operations are total: the store never fails once its inputs are
/// valid value objects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepo: Send + Sync {
    /// Insert a new submission, or revise the one already recorded for `email`.
    async fn upsert(
        &self,
        email: EmailAddress,
        interest: Interest,
        referral: ReferralSource,
    ) -> Submission;

    /// Snapshot of every submission, newest `created_at` first.
    async fn list(&self) -> Vec<Submission>;
}
