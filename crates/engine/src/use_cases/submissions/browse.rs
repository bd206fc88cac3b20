//! Admin browsing: search and CSV export over the newest-first listing.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::SecondsFormat;
use waitlist_domain::Submission;

use crate::infrastructure::ports::SubmissionRepo;

/// Column order of the CSV export.
pub const CSV_HEADERS: [&str; 5] = ["email", "interest", "referral", "createdAt", "updatedAt"];

/// Read-only admin view of the waitlist.
pub struct BrowseSubmissions {
    submissions: Arc<dyn SubmissionRepo>,
}

impl BrowseSubmissions {
    pub fn new(submissions: Arc<dyn SubmissionRepo>) -> Self {
        Self { submissions }
    }

    /// Newest-first submissions, narrowed by `query` when one is given.
    pub async fn search(&self, query: Option<&str>) -> Vec<Submission> {
        let all = self.submissions.list().await;
        filter_submissions(all, query.unwrap_or_default())
    }

    /// CSV of `search(query)`.
    pub async fn export_csv(&self, query: Option<&str>) -> String {
        let rows = self.search(query).await;
        tracing::debug!(rows = rows.len(), "Exporting waitlist CSV");
        render_csv(&rows)
    }
}

/// Keep submissions whose email, interest, or referral contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filter_submissions(submissions: Vec<Submission>, query: &str) -> Vec<Submission> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return submissions;
    }

    submissions
        .into_iter()
        .filter(|s| {
            s.email().as_str().to_lowercase().contains(&needle)
                || s.interest().as_str().to_lowercase().contains(&needle)
                || s.referral().as_str().contains(&needle)
        })
        .collect()
}

/// Render submissions as CSV: a header line, then one line per submission,
/// joined by `\n` with no trailing newline. Only the interest column is quoted.
pub fn render_csv(submissions: &[Submission]) -> String {
    let mut lines = Vec::with_capacity(submissions.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for s in submissions {
        lines.push(
            [
                Cow::Borrowed(s.email().as_str()),
                escape_csv(s.interest().as_str()),
                Cow::Borrowed(s.referral().as_str()),
                Cow::Owned(s.created_at().to_rfc3339_opts(SecondsFormat::AutoSi, true)),
                Cow::Owned(s.updated_at().to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

fn escape_csv(text: &str) -> Cow<'_, str> {
    if text.contains([',', '\n', '"']) {
        Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(text)
    }
}
