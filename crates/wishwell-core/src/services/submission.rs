//! Idea submission flow: validate, insert once, report.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;

use crate::error::SubmissionError;
use crate::models::{IdeaSubmission, SubmissionReceipt};
use crate::remote::IdeaStore;
use crate::sound::{SoundKind, SoundNotifier};

/// Drives a single idea from raw form text to a stored record.
///
/// At most one submission runs at a time; a second call while the first is
/// awaiting the store fails with [`SubmissionError::Busy`] without touching
/// the store.
pub struct IdeaSubmissionFlow<S: IdeaStore> {
    store: S,
    notifier: SoundNotifier,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl<S: IdeaStore> IdeaSubmissionFlow<S> {
    pub fn new(store: S, notifier: SoundNotifier, timeout: Duration) -> Self {
        Self {
            store,
            notifier,
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn notifier(&self) -> &SoundNotifier {
        &self.notifier
    }

    /// Whether a submission is currently awaiting the store.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate `raw` and insert it with a single remote attempt.
    ///
    /// Validation failures play the error cue and never reach the store.
    /// Accepted input plays a click, then success or error once the insert
    /// settles. Inserts that outlive the configured timeout count as failed.
    pub async fn submit(&self, raw: &str) -> Result<SubmissionReceipt, SubmissionError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Ignoring submit while another is in flight");
            return Err(SubmissionError::Busy);
        };

        let submission = match IdeaSubmission::parse(raw) {
            Ok(submission) => submission,
            Err(error) => {
                tracing::debug!("Idea rejected: {}", error);
                self.notifier.notify(SoundKind::Error);
                return Err(error);
            }
        };

        let chars = submission.char_count();
        let record = submission.into_record();
        self.notifier.notify(SoundKind::Click);

        let outcome = match tokio::time::timeout(self.timeout, self.store.insert_idea(&record)).await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(error)) => Err(error.to_string()),
            Err(_) => Err(format!(
                "the request timed out after {}s",
                self.timeout.as_secs()
            )),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Idea submitted ({} chars)", chars);
                self.notifier.notify(SoundKind::Success);
                Ok(SubmissionReceipt {
                    chars,
                    submitted_at: Utc::now(),
                })
            }
            Err(message) => {
                tracing::warn!("Idea submission failed: {}", message);
                self.notifier.notify(SoundKind::Error);
                Err(SubmissionError::RemoteInsertFailed(message))
            }
        }
    }
}

/// Clears the in-flight flag when the submission ends, however it ends.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{recording_notifier, StubIdeaStore};
    use crate::models::{PLACEHOLDER_AUTHOR, PLACEHOLDER_NOTE};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::sync::Notify;

    const IDEA: &str = "A recipe-sharing site for home cooks";

    fn flow(store: StubIdeaStore) -> (IdeaSubmissionFlow<StubIdeaStore>, Arc<crate::sound::RecordingSink>) {
        let (notifier, sink) = recording_notifier(true);
        (
            IdeaSubmissionFlow::new(store, notifier, Duration::from_secs(10)),
            sink,
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn accepted_idea_is_inserted_once_with_placeholders() {
        let (flow, sink) = flow(StubIdeaStore::default());

        let receipt = flow.submit(&format!("  {IDEA}\n")).await.unwrap();
        assert_eq!(receipt.chars, IDEA.chars().count());

        let records = flow.store().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].idea, IDEA);
        assert_eq!(records[0].author, PLACEHOLDER_AUTHOR);
        assert_eq!(records[0].note, PLACEHOLDER_NOTE);
        assert_eq!(sink.kinds(), vec![SoundKind::Click, SoundKind::Success]);
        assert!(!flow.is_submitting());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_input_never_reaches_the_store() {
        let (flow, sink) = flow(StubIdeaStore::default());

        assert_eq!(flow.submit("   \t ").await, Err(SubmissionError::EmptyInput));
        assert_eq!(
            flow.submit("  too short  ").await,
            Err(SubmissionError::TooShort { len: 9, min: 10 })
        );
        assert_eq!(
            flow.submit(&"x".repeat(1001)).await,
            Err(SubmissionError::TooLong { len: 1001, max: 1000 })
        );

        assert_eq!(flow.store().calls(), 0);
        assert_eq!(sink.kinds(), vec![SoundKind::Error; 3]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn boundary_lengths_are_accepted() {
        let (flow, _sink) = flow(StubIdeaStore::default());

        flow.submit("0123456789").await.unwrap();
        flow.submit(&"y".repeat(1000)).await.unwrap();
        assert_eq!(flow.store().calls(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn remote_failure_is_reported_without_retry() {
        let (flow, sink) = flow(StubIdeaStore::failing("permission denied"));

        let error = flow.submit(IDEA).await.unwrap_err();
        assert!(matches!(
            error,
            SubmissionError::RemoteInsertFailed(ref message) if message.contains("permission denied")
        ));
        assert!(!error.is_validation());
        assert_eq!(flow.store().calls(), 1);
        assert_eq!(sink.kinds(), vec![SoundKind::Click, SoundKind::Error]);

        // The visitor may try again.
        assert!(flow.submit(IDEA).await.is_err());
        assert_eq!(flow.store().calls(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn second_submit_while_in_flight_is_busy() {
        let gate = Arc::new(Notify::new());
        let (flow, _sink) = flow(StubIdeaStore::gated(gate.clone()));

        let first = flow.submit(IDEA);
        let second = async {
            while flow.store().calls() == 0 {
                tokio::task::yield_now().await;
            }
            assert!(flow.is_submitting());
            let result = flow.submit("Another valid website idea").await;
            gate.notify_one();
            result
        };

        let (first, second) = tokio::join!(first, second);
        assert!(first.is_ok());
        assert_eq!(second, Err(SubmissionError::Busy));
        assert_eq!(flow.store().calls(), 1);
        assert!(!flow.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn hung_insert_times_out() {
        let gate = Arc::new(Notify::new());
        let (flow, sink) = flow(StubIdeaStore::gated(gate));

        let error = flow.submit(IDEA).await.unwrap_err();
        assert!(matches!(
            error,
            SubmissionError::RemoteInsertFailed(ref message) if message.contains("timed out")
        ));
        assert_eq!(sink.kinds(), vec![SoundKind::Click, SoundKind::Error]);
        assert!(!flow.is_submitting());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn muted_flow_still_submits() {
        let (notifier, sink) = recording_notifier(false);
        let flow = IdeaSubmissionFlow::new(
            StubIdeaStore::default(),
            notifier,
            Duration::from_secs(10),
        );

        flow.submit(IDEA).await.unwrap();
        assert_eq!(flow.store().calls(), 1);
        assert!(sink.kinds().is_empty());
    }
}
