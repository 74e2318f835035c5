//! Application services
//!
//! Startup wiring and audio output for the desktop shell.

mod audio;
mod bootstrap;

pub use audio::WebviewAudioSink;
pub use bootstrap::AppServices;
