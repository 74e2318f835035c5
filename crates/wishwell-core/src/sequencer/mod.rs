//! Screen sequencer: the four-screen state machine.

mod timer;

use serde::{Deserialize, Serialize};

use crate::models::Screen;

pub use timer::ScreenTimer;

/// How long the greeting stays up before the coin appears.
pub const GREETING_DURATION_MS: u64 = 3_000;
/// Delay between tapping the coin and the form appearing.
pub const COIN_DROP_DELAY_MS: u64 = 1_500;
/// Delay between the celebration cue and the sparkle cue on the success screen.
pub const SPARKLE_FOLLOWUP_DELAY_MS: u64 = 1_000;

/// Completion signal emitted by a screen when it has served its purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenEvent {
    /// Greeting timer elapsed
    GreetingElapsed,
    /// Coin drop animation finished
    CoinDropped,
    /// Idea submission succeeded
    IdeaSubmitted,
}

impl ScreenEvent {
    /// The screen allowed to emit this event.
    pub const fn source(self) -> Screen {
        match self {
            Self::GreetingElapsed => Screen::Greeting,
            Self::CoinDropped => Screen::CoinInteraction,
            Self::IdeaSubmitted => Screen::IdeaForm,
        }
    }
}

/// Owns the current screen and the only transition rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenSequencer {
    current: Screen,
}

impl ScreenSequencer {
    /// Start a fresh session at the greeting.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Move to the next screen. No-op at the terminal screen.
    ///
    /// Returns the screen that is current afterwards.
    pub fn advance(&mut self) -> Screen {
        if let Some(next) = self.current.next() {
            tracing::debug!("Screen transition: {} -> {}", self.current, next);
            self.current = next;
        }
        self.current
    }

    /// Apply a completion event from a screen.
    ///
    /// Events from any screen other than the current one are ignored, so a
    /// retired screen can never move the sequence. Returns the new screen
    /// when a transition happened.
    pub fn handle(&mut self, event: ScreenEvent) -> Option<Screen> {
        if event.source() != self.current {
            tracing::debug!(
                "Ignoring {:?} while {} is current",
                event,
                self.current
            );
            return None;
        }
        let before = self.current;
        let after = self.advance();
        (after != before).then_some(after)
    }
}
