//! Data models for Wishwell

mod idea;
mod preferences;
mod screen;
mod theme;

pub use idea::{
    IdeaRecord, IdeaSubmission, SubmissionReceipt, MAX_IDEA_CHARS, MIN_IDEA_CHARS,
    PLACEHOLDER_AUTHOR, PLACEHOLDER_NOTE,
};
pub use preferences::Preferences;
pub use screen::Screen;
pub use theme::{ThemeColors, ThemeDefinition, ThemeId};
