//! Fixed catalog of visual themes

use crate::error::ThemeError;
use crate::models::{ThemeColors, ThemeDefinition, ThemeId};

const THEMES: [ThemeDefinition; 5] = [
    ThemeDefinition {
        id: ThemeId::Birthday,
        name: "Birthday Celebration",
        glyph: "🎂",
        colors: ThemeColors {
            primary: "linear-gradient(90deg, #f6c343, #9b5de5)",
            secondary: "linear-gradient(90deg, #f15bb5, #00bbf9)",
            accent: "#f6c343",
            background: "linear-gradient(135deg, rgba(155, 93, 229, 0.2), rgba(241, 91, 181, 0.2), rgba(0, 187, 249, 0.2))",
        },
    },
    ThemeDefinition {
        id: ThemeId::Ocean,
        name: "Ocean Breeze",
        glyph: "🌊",
        colors: ThemeColors {
            primary: "linear-gradient(90deg, #60a5fa, #06b6d4)",
            secondary: "linear-gradient(90deg, #2dd4bf, #2563eb)",
            accent: "#60a5fa",
            background: "linear-gradient(135deg, rgba(96, 165, 250, 0.2), rgba(34, 211, 238, 0.2), rgba(45, 212, 191, 0.2))",
        },
    },
    ThemeDefinition {
        id: ThemeId::Forest,
        name: "Enchanted Forest",
        glyph: "🌲",
        colors: ThemeColors {
            primary: "linear-gradient(90deg, #4ade80, #10b981)",
            secondary: "linear-gradient(90deg, #a3e635, #16a34a)",
            accent: "#4ade80",
            background: "linear-gradient(135deg, rgba(74, 222, 128, 0.2), rgba(52, 211, 153, 0.2), rgba(163, 230, 53, 0.2))",
        },
    },
    ThemeDefinition {
        id: ThemeId::Sunset,
        name: "Golden Sunset",
        glyph: "🌅",
        colors: ThemeColors {
            primary: "linear-gradient(90deg, #fb923c, #ef4444)",
            secondary: "linear-gradient(90deg, #facc15, #ea580c)",
            accent: "#fb923c",
            background: "linear-gradient(135deg, rgba(251, 146, 60, 0.2), rgba(248, 113, 113, 0.2), rgba(250, 204, 21, 0.2))",
        },
    },
    ThemeDefinition {
        id: ThemeId::Galaxy,
        name: "Cosmic Galaxy",
        glyph: "🌌",
        colors: ThemeColors {
            primary: "linear-gradient(90deg, #c084fc, #6366f1)",
            secondary: "linear-gradient(90deg, #f472b6, #9333ea)",
            accent: "#c084fc",
            background: "linear-gradient(135deg, rgba(192, 132, 252, 0.2), rgba(129, 140, 248, 0.2), rgba(244, 114, 182, 0.2))",
        },
    },
];

/// Read-only view over the built-in theme catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeRegistry;

impl ThemeRegistry {
    /// All themes, always in the same order.
    pub const fn list() -> &'static [ThemeDefinition] {
        &THEMES
    }

    /// Look up a theme by its string id.
    pub fn get(id: &str) -> Result<&'static ThemeDefinition, ThemeError> {
        let id: ThemeId = id.parse()?;
        Ok(Self::definition(id))
    }

    /// Definition for an id known to be in the catalog.
    pub fn definition(id: ThemeId) -> &'static ThemeDefinition {
        THEMES
            .iter()
            .find(|theme| theme.id == id)
            .unwrap_or(&THEMES[0])
    }

    pub fn default_theme() -> &'static ThemeDefinition {
        Self::definition(ThemeId::default())
    }
}
