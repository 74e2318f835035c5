//! Theme identifiers and definitions

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Identifier of one entry in the fixed theme catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Birthday,
    Ocean,
    Forest,
    Sunset,
    Galaxy,
}

impl ThemeId {
    /// Every theme id, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Birthday,
        Self::Ocean,
        Self::Forest,
        Self::Sunset,
        Self::Galaxy,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Galaxy => "galaxy",
        }
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ThemeError::UnknownTheme(value.trim().to_string()))
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling tokens for a theme, expressed as CSS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Main call-to-action gradient
    pub primary: &'static str,
    /// Secondary gradient for headings and decorations
    pub secondary: &'static str,
    /// Single accent color
    pub accent: &'static str,
    /// Full-screen backdrop
    pub background: &'static str,
}

/// Immutable description of one catalog theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDefinition {
    pub id: ThemeId,
    /// Display name
    pub name: &'static str,
    /// Short glyph shown next to the name
    pub glyph: &'static str,
    pub colors: ThemeColors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_catalog_ids_case_insensitively() {
        assert_eq!("ocean".parse::<ThemeId>().unwrap(), ThemeId::Ocean);
        assert_eq!(" Galaxy ".parse::<ThemeId>().unwrap(), ThemeId::Galaxy);
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        let error = "neon".parse::<ThemeId>().unwrap_err();
        assert_eq!(error, ThemeError::UnknownTheme("neon".to_string()));
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&ThemeId::Sunset).unwrap(),
            "\"sunset\""
        );
    }
}
