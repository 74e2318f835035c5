//! wishwell-core - Core library for Wishwell
//!
//! This crate contains the screen sequencer, idea submission flow, preference
//! store, theme catalog, and sound cues shared by the Wishwell front ends
//! (desktop, CLI).

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod remote;
pub mod sequencer;
pub mod services;
pub mod sound;
pub mod themes;

pub use error::{Error, Result, SubmissionError, ThemeError};
pub use models::{IdeaRecord, Preferences, Screen, ThemeDefinition, ThemeId};
pub use sequencer::{ScreenEvent, ScreenSequencer};
pub use services::{IdeaSubmissionFlow, Journey, PreferenceStore};
pub use sound::{SoundKind, SoundNotifier};
pub use themes::ThemeRegistry;
