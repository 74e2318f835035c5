use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use wishwell_core::SoundKind;

#[derive(Parser)]
#[command(name = "wishwell")]
#[command(about = "A birthday greeting that collects one website idea")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the preference database
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the greeting in the terminal
    Walk,
    /// List available themes
    Themes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select a theme by id
    Theme {
        /// Theme id (birthday, ocean, forest, sunset, galaxy)
        id: String,
    },
    /// Turn sound cues on or off (toggles when omitted)
    Sound {
        #[arg(value_enum)]
        state: Option<SoundSwitch>,
    },
    /// Show current preferences
    #[command(alias = "preferences")]
    Prefs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit a website idea without the walkthrough
    Submit {
        /// Idea text (read from stdin when omitted)
        idea: Vec<String>,
    },
    /// Render a sound cue to a WAV file
    Cue {
        #[arg(value_enum)]
        kind: CueKind,
        /// Output path (defaults to wishwell-<kind>.wav)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SoundSwitch {
    On,
    Off,
}

impl SoundSwitch {
    pub const fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CueKind {
    Click,
    Success,
    Error,
    Coin,
    Celebration,
    Sparkle,
}

impl From<CueKind> for SoundKind {
    fn from(kind: CueKind) -> Self {
        match kind {
            CueKind::Click => Self::Click,
            CueKind::Success => Self::Success,
            CueKind::Error => Self::Error,
            CueKind::Coin => Self::Coin,
            CueKind::Celebration => Self::Celebration,
            CueKind::Sparkle => Self::Sparkle,
        }
    }
}
