use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use wishwell_core::config::AppConfig;
use wishwell_core::db::{Database, LibSqlPreferenceStorage};
use wishwell_core::models::{Preferences, ThemeId};
use wishwell_core::services::PreferenceStore;
use wishwell_core::sound::TracingSink;
use wishwell_core::{SoundKind, ThemeRegistry};

use crate::error::CliError;

pub type CliPreferenceStore = PreferenceStore<LibSqlPreferenceStorage>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ThemeListItem {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PreferencesView {
    pub theme: &'static str,
    pub theme_name: &'static str,
    pub sound_enabled: bool,
}

pub fn load_config() -> Result<AppConfig, CliError> {
    Ok(AppConfig::from_env()?)
}

/// `--db-path` wins over `WISHWELL_DB_PATH` and the default location.
///
/// Remote settings are not consulted, so a bad `SUPABASE_URL` never blocks
/// the local preference commands.
pub fn resolve_db_path(
    cli_db_path: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    cli_db_path.unwrap_or_else(|| AppConfig::db_path_from_lookup(lookup))
}

/// Load preferences. The terminal has no audio output, so cues are logged.
pub async fn open_preferences(db_path: &Path) -> Result<CliPreferenceStore, CliError> {
    let database = Database::open(db_path).await?;
    let storage = LibSqlPreferenceStorage::new(database);
    Ok(PreferenceStore::load(storage, Arc::new(TracingSink)).await?)
}

pub fn theme_list_items(selected: ThemeId) -> Vec<ThemeListItem> {
    ThemeRegistry::list()
        .iter()
        .map(|theme| ThemeListItem {
            id: theme.id.as_str(),
            name: theme.name,
            glyph: theme.glyph,
            selected: theme.id == selected,
        })
        .collect()
}

pub fn format_theme_lines(items: &[ThemeListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let marker = if item.selected { '*' } else { ' ' };
            format!("{marker} {:<9} {} {}", item.id, item.glyph, item.name)
        })
        .collect()
}

pub fn preferences_view(preferences: Preferences) -> PreferencesView {
    let theme = ThemeRegistry::definition(preferences.theme);
    PreferencesView {
        theme: theme.id.as_str(),
        theme_name: theme.name,
        sound_enabled: preferences.sound_enabled,
    }
}

pub fn format_preferences(view: &PreferencesView) -> Vec<String> {
    vec![
        format!("theme: {} ({})", view.theme, view.theme_name),
        format!("sound: {}", if view.sound_enabled { "on" } else { "off" }),
    ]
}

/// Join positional words into one idea, falling back to piped stdin.
///
/// Validation is left to the submission flow, so an empty result is fine.
pub fn resolve_idea_text(idea_parts: &[String]) -> Result<String, CliError> {
    if !idea_parts.is_empty() {
        return Ok(idea_parts.join(" "));
    }
    Ok(read_piped_stdin()?.unwrap_or_default())
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok(Some(input))
}

pub fn default_cue_path(kind: SoundKind) -> PathBuf {
    PathBuf::from(format!("wishwell-{kind}.wav"))
}
