//! Waitlist submission use cases.
//!
//! - `SubmitSubmission` - validate a signup and record it
//! - `BrowseSubmissions` - admin search and CSV export

mod browse;
mod submit;

use std::sync::Arc;

pub use browse::{filter_submissions, render_csv, BrowseSubmissions, CSV_HEADERS};
pub use submit::{SignupError, SubmitSubmission, ValidSignup};

use crate::infrastructure::ports::SubmissionRepo;

/// Container for submission use cases.
pub struct SubmissionUseCases {
    pub submit: SubmitSubmission,
    pub browse: BrowseSubmissions,
}

impl SubmissionUseCases {
    pub fn new(submissions: Arc<dyn SubmissionRepo>) -> Self {
        Self {
            submit: SubmitSubmission::new(submissions.clone()),
            browse: BrowseSubmissions::new(submissions),
        }
    }
}
