//! Sound cues keyed by semantic event kind.

mod sink;
mod synth;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::Preferences;
use crate::Result;

pub use sink::{AudioSink, RecordingSink, TracingSink};
pub use synth::{render_cue_wav, ToneSpec, Waveform, CUE_SAMPLE_RATE_HZ};

/// Semantic category of an audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundKind {
    Click,
    Success,
    Error,
    Coin,
    Celebration,
    Sparkle,
}

impl SoundKind {
    pub const ALL: [Self; 6] = [
        Self::Click,
        Self::Success,
        Self::Error,
        Self::Coin,
        Self::Celebration,
        Self::Sparkle,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Success => "success",
            Self::Error => "error",
            Self::Coin => "coin",
            Self::Celebration => "celebration",
            Self::Sparkle => "sparkle",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Click => 0,
            Self::Success => 1,
            Self::Error => 2,
            Self::Coin => 3,
            Self::Celebration => 4,
            Self::Sparkle => 5,
        }
    }
}

impl std::fmt::Display for SoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-rendered WAV bytes for every kind.
#[derive(Debug)]
struct CueBank {
    cues: Vec<Arc<[u8]>>,
}

impl CueBank {
    fn render() -> Result<Self> {
        let cues = SoundKind::ALL
            .iter()
            .map(|kind| render_cue_wav(*kind, CUE_SAMPLE_RATE_HZ).map(Arc::from))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cues })
    }

    fn get(&self, kind: SoundKind) -> Arc<[u8]> {
        Arc::clone(&self.cues[kind.index()])
    }
}

/// Plays cues when the live sound preference allows it.
///
/// Cheap to clone; clones share the rendered cues, the sink, and the
/// preference subscription.
#[derive(Clone)]
pub struct SoundNotifier {
    preferences: watch::Receiver<Preferences>,
    sink: Arc<dyn AudioSink>,
    cues: Arc<CueBank>,
}

impl SoundNotifier {
    /// Render all cues up front and bind them to a preference subscription.
    pub fn new(preferences: watch::Receiver<Preferences>, sink: Arc<dyn AudioSink>) -> Result<Self> {
        Ok(Self {
            preferences,
            sink,
            cues: Arc::new(CueBank::render()?),
        })
    }

    /// Whether cues are currently audible.
    pub fn is_enabled(&self) -> bool {
        self.preferences.borrow().sound_enabled
    }

    /// Play the cue for `kind`, or do nothing when sound is disabled.
    pub fn notify(&self, kind: SoundKind) {
        if !self.is_enabled() {
            tracing::trace!("Sound disabled; skipping {} cue", kind);
            return;
        }
        tracing::debug!("Playing {} cue", kind);
        self.sink.play(kind, self.cues.get(kind));
    }
}

impl std::fmt::Debug for SoundNotifier {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SoundNotifier")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}
