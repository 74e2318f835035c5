//! Audio output seam for rendered cues.

use std::sync::{Arc, Mutex, PoisonError};

use super::SoundKind;

/// Destination for rendered WAV cues.
///
/// `play` must return promptly: hosts start playback and return, so rapid
/// calls may overlap but never queue behind each other.
pub trait AudioSink: Send + Sync {
    fn play(&self, kind: SoundKind, wav: Arc<[u8]>);
}

/// Sink for hosts without audio output that logs each cue instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AudioSink for TracingSink {
    fn play(&self, kind: SoundKind, wav: Arc<[u8]>) {
        tracing::info!("♪ {} cue ({} bytes)", kind, wav.len());
    }
}

/// Sink that remembers what it was asked to play.
#[derive(Debug, Default)]
pub struct RecordingSink {
    played: Mutex<Vec<(SoundKind, Arc<[u8]>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds played so far, oldest first.
    pub fn kinds(&self) -> Vec<SoundKind> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Cues played so far, oldest first.
    pub fn cues(&self) -> Vec<(SoundKind, Arc<[u8]>)> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, kind: SoundKind, wav: Arc<[u8]>) {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((kind, wav));
    }
}
