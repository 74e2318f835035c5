//! Visitor preferences model

use serde::{Deserialize, Serialize};

use super::ThemeId;

/// Persisted visitor choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected catalog theme
    pub theme: ThemeId,
    /// Whether sound cues play
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeId::default(),
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default() {
        let preferences = Preferences::default();
        assert_eq!(preferences.theme, ThemeId::Birthday);
        assert!(preferences.sound_enabled);
    }
}
