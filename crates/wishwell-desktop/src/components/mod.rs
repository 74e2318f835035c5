//! UI Components
//!
//! Controls that float above every screen.

mod sound_control;
mod theme_selector;

pub use sound_control::SoundControl;
pub use theme_selector::ThemeSelector;
