//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::SubmissionRepo;
use crate::use_cases::SubmissionUseCases;

/// Main application state.
///
/// Holds the use cases built on the submission store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub submissions: SubmissionUseCases,
}

impl App {
    pub fn new(submissions: Arc<dyn SubmissionRepo>) -> Self {
        let use_cases = UseCases {
            submissions: SubmissionUseCases::new(submissions),
        };

        Self { use_cases }
    }
}
