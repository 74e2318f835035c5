//! Services that combine storage, remote inserts, and sound cues.

mod journey;
mod preferences;
mod submission;

pub use journey::{Journey, JourneyTimings};
pub use preferences::{PreferenceStore, SOUND_CONFIRM_DELAY_MS, SOUND_KEY, THEME_KEY};
pub use submission::IdeaSubmissionFlow;
