pub mod common;
pub mod cue;
pub mod prefs;
pub mod sound;
pub mod submit;
pub mod theme;
pub mod themes;
pub mod walk;
