//! Screen model

use serde::{Deserialize, Serialize};

/// One stage of the four-stage greeting journey.
///
/// The order is fixed: `Greeting -> CoinInteraction -> IdeaForm -> Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Opening greeting animation
    #[default]
    Greeting,
    /// Wishing well with a coin to drop
    CoinInteraction,
    /// Website idea form
    IdeaForm,
    /// Closing celebration (terminal)
    Success,
}

impl Screen {
    /// All screens in journey order.
    pub const ALL: [Self; 4] = [
        Self::Greeting,
        Self::CoinInteraction,
        Self::IdeaForm,
        Self::Success,
    ];

    /// The screen that follows this one, or `None` at the terminal screen.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Greeting => Some(Self::CoinInteraction),
            Self::CoinInteraction => Some(Self::IdeaForm),
            Self::IdeaForm => Some(Self::Success),
            Self::Success => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::CoinInteraction => "coin_interaction",
            Self::IdeaForm => "idea_form",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
