//! Waitlist submission storage.
//!
//! Submissions are kept in insertion order alongside an email -> position
//! index. Both live behind a single lock and are only written by `upsert`,
//! so the index always points at the record it names. Nothing survives a
//! restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use waitlist_domain::{EmailAddress, Interest, ReferralSource, Submission};

use crate::infrastructure::ports::{ClockPort, SubmissionRepo};

/// Process-local store of waitlist submissions, at most one per email.
pub struct SubmissionStore {
    table: RwLock<SubmissionTable>,
    clock: Arc<dyn ClockPort>,
}

#[derive(Default)]
struct SubmissionTable {
    submissions: Vec<Submission>,
    index_by_email: HashMap<EmailAddress, usize>,
}

impl SubmissionStore {
    /// Create an empty store.
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            table: RwLock::new(SubmissionTable::default()),
            clock,
        }
    }

    /// Number of distinct emails recorded.
    pub async fn len(&self) -> usize {
        self.table.read().await.submissions.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.submissions.is_empty()
    }
}

#[async_trait]
impl SubmissionRepo for SubmissionStore {
    async fn upsert(
        &self,
        email: EmailAddress,
        interest: Interest,
        referral: ReferralSource,
    ) -> Submission {
        let mut table = self.table.write().await;
        // Read the clock under the write lock so updated_at follows write order.
        let now = self.clock.now();

        if let Some(position) = table.index_by_email.get(&email).copied() {
            if let Some(existing) = table.submissions.get_mut(position) {
                existing.revise(interest, referral, now);
                tracing::debug!(email = %email, "Updated existing waitlist submission");
                return existing.clone();
            }
        }

        let submission = Submission::new(email.clone(), interest, referral, now);
        table.submissions.push(submission.clone());
        let position = table.submissions.len() - 1;
        table.index_by_email.insert(email, position);

        tracing::info!(
            total = table.submissions.len(),
            "Recorded new waitlist submission"
        );
        submission
    }

    async fn list(&self) -> Vec<Submission> {
        // Reverse first so equal timestamps come out most recently inserted first;
        // sort_by is stable.
        let mut snapshot: Vec<Submission> = {
            let table = self.table.read().await;
            table.submissions.iter().rev().cloned().collect()
        };
        snapshot.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{test_epoch, FixedClock, SteppingClock};
    use chrono::Duration;
    use std::collections::BTreeSet;

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s).expect("valid email")
    }

    fn interest(s: &str) -> Interest {
        Interest::new(s).expect("valid interest")
    }

    fn stepping_store() -> SubmissionStore {
        SubmissionStore::new(Arc::new(SteppingClock::new(
            test_epoch(),
            Duration::seconds(1),
        )))
    }

    #[tokio::test]
    async fn upsert_then_list_returns_the_record() {
        let store = stepping_store();

        let saved = store
            .upsert(email("a@b.co"), interest("hello there"), ReferralSource::Friend)
            .await;

        let listed = store.list().await;
        assert_eq!(listed, vec![saved.clone()]);
        assert_eq!(saved.email().as_str(), "a@b.co");
        assert_eq!(saved.interest().as_str(), "hello there");
        assert_eq!(saved.referral(), ReferralSource::Friend);
        assert_eq!(saved.created_at(), saved.updated_at());
    }

    #[tokio::test]
    async fn upserting_same_email_keeps_one_record() {
        let store = stepping_store();

        let first = store
            .upsert(email("a@b.co"), interest("hello there"), ReferralSource::Friend)
            .await;
        let second = store
            .upsert(
                email("a@b.co"),
                interest("compounding habits"),
                ReferralSource::Newsletter,
            )
            .await;

        assert_eq!(store.len().await, 1);
        assert_eq!(second.created_at(), first.created_at());
        assert!(second.updated_at() >= first.updated_at());
        assert!(second.updated_at() > second.created_at());

        let listed = store.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].interest().as_str(), "compounding habits");
        assert_eq!(listed[0].referral(), ReferralSource::Newsletter);
    }

    #[tokio::test]
    async fn update_keeps_position_in_insertion_order() {
        // Frozen clock: every record ties on created_at, so list() falls back to
        // insertion order (newest insert first).
        let store = SubmissionStore::new(Arc::new(FixedClock(test_epoch())));

        store
            .upsert(email("one@x.io"), interest("first entry"), ReferralSource::Other)
            .await;
        store
            .upsert(email("two@x.io"), interest("second entry"), ReferralSource::Other)
            .await;
        store
            .upsert(email("one@x.io"), interest("first, revised"), ReferralSource::Friend)
            .await;

        let emails: Vec<String> = store
            .list()
            .await
            .iter()
            .map(|s| s.email().to_string())
            .collect();
        assert_eq!(emails, vec!["two@x.io", "one@x.io"]);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = stepping_store();
        for address in ["a@x.io", "b@x.io", "c@x.io"] {
            store
                .upsert(email(address), interest("some interest"), ReferralSource::Twitter)
                .await;
        }
        // Updating the oldest record must not move it forward.
        store
            .upsert(email("a@x.io"), interest("changed my mind"), ReferralSource::Other)
            .await;

        let listed = store.list().await;
        let emails: Vec<&str> = listed.iter().map(|s| s.email().as_str()).collect();
        assert_eq!(emails, vec!["c@x.io", "b@x.io", "a@x.io"]);
        for pair in listed.windows(2) {
            assert!(pair[0].created_at() >= pair[1].created_at());
        }
    }

    #[tokio::test]
    async fn list_length_counts_distinct_emails() {
        let store = stepping_store();
        let addresses = ["a@x.io", "b@x.io", "a@x.io", "c@x.io", "b@x.io", "A@x.io"];
        for address in addresses {
            store
                .upsert(email(address), interest("some interest"), ReferralSource::Other)
                .await;
        }
        // Case-sensitive: A@x.io and a@x.io are different people.
        assert_eq!(store.list().await.len(), 4);
    }

    #[tokio::test]
    async fn list_returns_a_snapshot() {
        let store = stepping_store();
        store
            .upsert(email("a@b.co"), interest("hello there"), ReferralSource::Friend)
            .await;

        let mut snapshot = store.list().await;
        snapshot.clear();

        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_upserts_keep_one_record_per_email() {
        let store = Arc::new(stepping_store());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let address = format!("user{}@x.io", i % 8);
                store
                    .upsert(email(&address), interest("racing signups"), ReferralSource::Other)
                    .await
            }));
        }
        for handle in handles {
            handle.await.expect("task completes");
        }

        assert_eq!(store.len().await, 8);
        let listed = store.list().await;
        let emails: BTreeSet<&str> = listed.iter().map(|s| s.email().as_str()).collect();
        assert_eq!(emails.len(), listed.len());
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = stepping_store();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }
}
