//! Headless driver for one visit through the four screens.
//!
//! Front ends that render screens themselves (the desktop shell) use the
//! sequencer directly. `Journey` packages the same rules with the timers and
//! cues attached, for hosts that have no view layer of their own.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::SubmissionError;
use crate::models::{Screen, SubmissionReceipt};
use crate::remote::IdeaStore;
use crate::sequencer::{
    ScreenEvent, ScreenSequencer, ScreenTimer, COIN_DROP_DELAY_MS, GREETING_DURATION_MS,
    SPARKLE_FOLLOWUP_DELAY_MS,
};
use crate::sound::{SoundKind, SoundNotifier};

use super::IdeaSubmissionFlow;

/// Delays used by the timed screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyTimings {
    pub greeting: Duration,
    pub coin_drop: Duration,
    pub sparkle_followup: Duration,
}

impl Default for JourneyTimings {
    fn default() -> Self {
        Self {
            greeting: Duration::from_millis(GREETING_DURATION_MS),
            coin_drop: Duration::from_millis(COIN_DROP_DELAY_MS),
            sparkle_followup: Duration::from_millis(SPARKLE_FOLLOWUP_DELAY_MS),
        }
    }
}

/// One visit: sequencer, screen-scoped timers, and the submission flow.
///
/// Timers belong to the screen that armed them and are dropped on every
/// transition, so a stale timer can neither fire a cue nor move the
/// sequence. Must be created inside a tokio runtime.
pub struct Journey<S: IdeaStore> {
    sequencer: ScreenSequencer,
    flow: IdeaSubmissionFlow<S>,
    notifier: SoundNotifier,
    timings: JourneyTimings,
    events_tx: mpsc::UnboundedSender<ScreenEvent>,
    events_rx: mpsc::UnboundedReceiver<ScreenEvent>,
    screen_timer: Option<ScreenTimer>,
    cue_timer: Option<ScreenTimer>,
    coin_dropping: bool,
}

impl<S: IdeaStore> Journey<S> {
    /// Begin at the greeting and arm its timer.
    pub fn start(flow: IdeaSubmissionFlow<S>, timings: JourneyTimings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let notifier = flow.notifier().clone();
        let mut journey = Self {
            sequencer: ScreenSequencer::new(),
            flow,
            notifier,
            timings,
            events_tx,
            events_rx,
            screen_timer: None,
            cue_timer: None,
            coin_dropping: false,
        };
        journey.enter(Screen::Greeting);
        journey
    }

    pub const fn current(&self) -> Screen {
        self.sequencer.current()
    }

    pub const fn flow(&self) -> &IdeaSubmissionFlow<S> {
        &self.flow
    }

    /// Tap the wishing coin.
    ///
    /// Plays the coin cue and schedules the move to the form. Returns
    /// `false` when the coin is not showing or is already falling.
    pub fn drop_coin(&mut self) -> bool {
        if self.current() != Screen::CoinInteraction || self.coin_dropping {
            return false;
        }
        self.coin_dropping = true;
        self.notifier.notify(SoundKind::Coin);
        self.screen_timer = Some(self.schedule(self.timings.coin_drop, ScreenEvent::CoinDropped));
        true
    }

    /// Submit the idea form. Success moves the visit to the final screen.
    pub async fn submit_idea(&mut self, text: &str) -> Result<SubmissionReceipt, SubmissionError> {
        if self.current() != Screen::IdeaForm {
            return Err(SubmissionError::FormClosed);
        }
        let receipt = self.flow.submit(text).await?;
        self.apply(ScreenEvent::IdeaSubmitted);
        Ok(receipt)
    }

    /// Wait for the armed screen timer and apply its transition.
    ///
    /// Returns `None` when the current screen has nothing pending: the form
    /// waits for a submission, the coin waits for a tap, and the success
    /// screen is final.
    pub async fn next_transition(&mut self) -> Option<Screen> {
        while self.screen_timer.is_some() {
            let event = self.events_rx.recv().await?;
            if let Some(screen) = self.apply(event) {
                return Some(screen);
            }
        }
        None
    }

    fn apply(&mut self, event: ScreenEvent) -> Option<Screen> {
        let next = self.sequencer.handle(event)?;
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, screen: Screen) {
        self.screen_timer = None;
        self.cue_timer = None;
        self.coin_dropping = false;

        match screen {
            Screen::Greeting => {
                self.screen_timer =
                    Some(self.schedule(self.timings.greeting, ScreenEvent::GreetingElapsed));
            }
            Screen::CoinInteraction | Screen::IdeaForm => {}
            Screen::Success => {
                self.notifier.notify(SoundKind::Celebration);
                let notifier = self.notifier.clone();
                self.cue_timer = Some(ScreenTimer::start(
                    self.timings.sparkle_followup,
                    move || notifier.notify(SoundKind::Sparkle),
                ));
            }
        }
    }

    fn schedule(&self, delay: Duration, event: ScreenEvent) -> ScreenTimer {
        let events = self.events_tx.clone();
        ScreenTimer::start(delay, move || {
            events.send(event).ok();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{recording_notifier, StubIdeaStore};
    use crate::sound::RecordingSink;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn journey(store: StubIdeaStore) -> (Journey<StubIdeaStore>, Arc<RecordingSink>) {
        let (notifier, sink) = recording_notifier(true);
        let flow = IdeaSubmissionFlow::new(store, notifier, Duration::from_secs(10));
        (Journey::start(flow, JourneyTimings::default()), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn full_visit_reaches_success_with_cues() {
        let (mut journey, sink) = journey(StubIdeaStore::default());
        assert_eq!(journey.current(), Screen::Greeting);

        let started = tokio::time::Instant::now();
        assert_eq!(journey.next_transition().await, Some(Screen::CoinInteraction));
        assert!(started.elapsed() >= Duration::from_millis(GREETING_DURATION_MS));

        // Nothing pending until the coin is tapped.
        assert_eq!(journey.next_transition().await, None);

        assert!(journey.drop_coin());
        assert!(!journey.drop_coin(), "repeated taps are ignored");
        assert_eq!(journey.next_transition().await, Some(Screen::IdeaForm));

        journey
            .submit_idea("Build a recipe-sharing site for home cooks")
            .await
            .unwrap();
        assert_eq!(journey.current(), Screen::Success);
        assert_eq!(journey.next_transition().await, None);
        assert_eq!(
            sink.kinds(),
            vec![
                SoundKind::Coin,
                SoundKind::Click,
                SoundKind::Success,
                SoundKind::Celebration,
            ]
        );

        tokio::time::sleep(Duration::from_millis(SPARKLE_FOLLOWUP_DELAY_MS + 1)).await;
        tokio::task::yield_now().await;
        assert_eq!(sink.kinds().last(), Some(&SoundKind::Sparkle));
        assert_eq!(journey.flow().store().calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_keeps_the_form() {
        let (mut journey, sink) = journey(StubIdeaStore::failing("offline"));
        journey.next_transition().await;
        journey.drop_coin();
        journey.next_transition().await;
        sink.clear();

        let error = journey
            .submit_idea("A guestbook for birthday wishes")
            .await
            .unwrap_err();
        assert!(matches!(error, SubmissionError::RemoteInsertFailed(_)));
        assert_eq!(journey.current(), Screen::IdeaForm);
        assert_eq!(sink.kinds(), vec![SoundKind::Click, SoundKind::Error]);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_idea_keeps_the_form() {
        let (mut journey, _sink) = journey(StubIdeaStore::default());
        journey.next_transition().await;
        journey.drop_coin();
        journey.next_transition().await;

        assert_eq!(
            journey.submit_idea("short").await,
            Err(SubmissionError::TooShort { len: 5, min: 10 })
        );
        assert_eq!(journey.current(), Screen::IdeaForm);
        assert_eq!(journey.flow().store().calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_before_form_is_rejected() {
        let (mut journey, _sink) = journey(StubIdeaStore::default());

        assert_eq!(
            journey.submit_idea("A perfectly valid idea").await,
            Err(SubmissionError::FormClosed)
        );
        assert!(!journey.drop_coin(), "coin is not showing yet");
        assert_eq!(journey.current(), Screen::Greeting);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_journey_plays_no_late_sparkle() {
        let (mut journey, sink) = journey(StubIdeaStore::default());
        journey.next_transition().await;
        journey.drop_coin();
        journey.next_transition().await;
        journey.submit_idea("An online museum of cakes").await.unwrap();
        drop(journey);

        tokio::time::sleep(Duration::from_millis(SPARKLE_FOLLOWUP_DELAY_MS * 2)).await;
        tokio::task::yield_now().await;
        assert!(!sink.kinds().contains(&SoundKind::Sparkle));
    }
}
