//! Cue playback through the webview.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;
use tokio::sync::mpsc;

use wishwell_core::sound::AudioSink;
use wishwell_core::SoundKind;

type Cue = (SoundKind, Arc<[u8]>);

/// Sends rendered cues to the webview's audio element.
///
/// `play` only enqueues. A task on the UI scope drains the queue and starts
/// each cue in its own eval, so overlapping cues play together.
pub struct WebviewAudioSink {
    queue: mpsc::UnboundedSender<Cue>,
}

impl WebviewAudioSink {
    /// Create the sink and start its player on the current component scope.
    pub fn start() -> Arc<Self> {
        let (queue, mut cues) = mpsc::unbounded_channel::<Cue>();
        spawn(async move {
            while let Some((kind, wav)) = cues.recv().await {
                let script = play_script(&wav);
                spawn(async move {
                    if let Err(error) = document::eval(&script).await {
                        tracing::warn!("Failed to play {} cue: {}", kind, error);
                    }
                });
            }
        });
        Arc::new(Self { queue })
    }
}

impl AudioSink for WebviewAudioSink {
    fn play(&self, kind: SoundKind, wav: Arc<[u8]>) {
        if self.queue.send((kind, wav)).is_err() {
            tracing::debug!("Audio player stopped; dropping {} cue", kind);
        }
    }
}

fn play_script(wav: &[u8]) -> String {
    format!(
        "const cue = new Audio('data:audio/wav;base64,{}');\ncue.play().catch(() => {{}});\nreturn true;",
        STANDARD.encode(wav)
    )
}
