//! Submit use case - validates a waitlist signup and upserts it.

use std::sync::Arc;

use waitlist_domain::{EmailAddress, Interest, ReferralSource, Submission};
use waitlist_shared::SubmitSubmissionRequest;

use crate::infrastructure::ports::SubmissionRepo;

/// Why a signup was turned away.
///
/// The `Display` text is what the caller sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    /// The hidden honeypot field was filled in.
    #[error("Rejected")]
    Rejected,

    #[error("A valid email is required.")]
    InvalidEmail,

    #[error("Please share a bit more about your interest (min 5 chars).")]
    InterestTooShort,

    #[error("Invalid referral source.")]
    InvalidReferral,
}

/// A signup that passed every check, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub email: EmailAddress,
    pub interest: Interest,
    pub referral: ReferralSource,
}

impl ValidSignup {
    /// Checks run in a fixed order; the first failure wins.
    ///
    /// 1. honeypot filled in
    /// 2. email shape
    /// 3. interest length (after trimming)
    /// 4. referral source
    pub fn parse(request: SubmitSubmissionRequest) -> Result<Self, SignupError> {
        let SubmitSubmissionRequest {
            email,
            interest,
            referral,
            honeypot,
        } = request;

        if honeypot.is_some_and(|value| !value.trim().is_empty()) {
            return Err(SignupError::Rejected);
        }

        let email = email
            .and_then(|email| EmailAddress::new(email).ok())
            .ok_or(SignupError::InvalidEmail)?;

        let interest = interest
            .and_then(|interest| Interest::new(interest).ok())
            .ok_or(SignupError::InterestTooShort)?;

        let referral = referral
            .and_then(|referral| referral.parse::<ReferralSource>().ok())
            .ok_or(SignupError::InvalidReferral)?;

        Ok(Self {
            email,
            interest,
            referral,
        })
    }
}

/// Validates and records waitlist signups.
///
/// A rejected signup never reaches the store.
pub struct SubmitSubmission {
    submissions: Arc<dyn SubmissionRepo>,
}

impl SubmitSubmission {
    pub fn new(submissions: Arc<dyn SubmissionRepo>) -> Self {
        Self { submissions }
    }

    pub async fn execute(
        &self,
        request: SubmitSubmissionRequest,
    ) -> Result<Submission, SignupError> {
        let signup = match ValidSignup::parse(request) {
            Ok(signup) => signup,
            Err(SignupError::Rejected) => {
                tracing::warn!("Discarded waitlist signup with filled honeypot");
                return Err(SignupError::Rejected);
            }
            Err(e) => {
                tracing::debug!(reason = %e, "Rejected waitlist signup");
                return Err(e);
            }
        };

        let saved = self
            .submissions
            .upsert(signup.email, signup.interest, signup.referral)
            .await;
        Ok(saved)
    }
}
