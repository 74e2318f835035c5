use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use wishwell_core::config::AppConfig;
use wishwell_core::models::{Preferences, ThemeId};
use wishwell_core::remote::StoreError;
use wishwell_core::{SoundKind, SubmissionError};

use crate::cli::{Cli, Commands, CueKind, SoundSwitch};
use crate::commands::common::{
    default_cue_path, format_preferences, format_theme_lines, open_preferences,
    preferences_view, resolve_db_path, resolve_idea_text, theme_list_items, PreferencesView,
};
use crate::commands::cue::run_cue;
use crate::commands::sound::run_sound;
use crate::commands::submit::run_submit;
use crate::commands::theme::run_theme;
use crate::error::CliError;

fn config_with_db(db_path: PathBuf) -> AppConfig {
    AppConfig {
        supabase_url: None,
        supabase_anon_key: None,
        ideas_table: "wishes".to_string(),
        submit_timeout: Duration::from_secs(10),
        db_path,
    }
}

#[test]
fn theme_list_marks_only_the_selected_theme() {
    let items = theme_list_items(ThemeId::Forest);
    assert_eq!(items.len(), 5);
    assert_eq!(
        items.iter().filter(|item| item.selected).map(|item| item.id).collect::<Vec<_>>(),
        vec!["forest"]
    );
    assert_eq!(items[0].id, "birthday");
}

#[test]
fn theme_lines_prefix_selected_with_marker() {
    let lines = format_theme_lines(&theme_list_items(ThemeId::Birthday));
    assert!(lines[0].starts_with("* birthday"));
    assert!(lines[0].ends_with("Birthday Celebration"));
    assert!(lines[1].starts_with("  ocean"));
}

#[test]
fn preferences_view_resolves_theme_name() {
    let view = preferences_view(Preferences {
        theme: ThemeId::Galaxy,
        sound_enabled: false,
    });
    assert_eq!(
        view,
        PreferencesView {
            theme: "galaxy",
            theme_name: "Cosmic Galaxy",
            sound_enabled: false,
        }
    );
    assert_eq!(
        format_preferences(&view),
        vec![
            "theme: galaxy (Cosmic Galaxy)".to_string(),
            "sound: off".to_string(),
        ]
    );
}

#[test]
fn idea_words_are_joined_with_spaces() {
    let parts = ["A", "site", "for", "birthday", "playlists"].map(String::from);
    assert_eq!(
        resolve_idea_text(&parts).unwrap(),
        "A site for birthday playlists"
    );
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    move |key: &str| {
        pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

#[test]
fn cli_db_path_overrides_environment() {
    let lookup = env(&[("WISHWELL_DB_PATH", "/tmp/from-env.db")]);
    assert_eq!(
        resolve_db_path(Some(PathBuf::from("/tmp/flag.db")), &lookup),
        PathBuf::from("/tmp/flag.db")
    );
    assert_eq!(
        resolve_db_path(None, &lookup),
        PathBuf::from("/tmp/from-env.db")
    );
}

#[test]
fn cue_kinds_map_to_every_sound_kind() {
    let mapped = [
        CueKind::Click,
        CueKind::Success,
        CueKind::Error,
        CueKind::Coin,
        CueKind::Celebration,
        CueKind::Sparkle,
    ]
    .map(SoundKind::from);
    assert_eq!(mapped, SoundKind::ALL);
    assert_eq!(
        default_cue_path(SoundKind::Coin),
        PathBuf::from("wishwell-coin.wav")
    );
}

#[test]
fn parses_sound_switch_and_global_db_path() {
    let cli = Cli::try_parse_from(["wishwell", "sound", "off", "--db-path", "/tmp/x.db"]).unwrap();
    assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/x.db")));
    assert!(matches!(
        cli.command,
        Some(Commands::Sound {
            state: Some(SoundSwitch::Off)
        })
    ));

    let cli = Cli::try_parse_from(["wishwell", "sound"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Sound { state: None })));
}

#[test]
fn rejects_unknown_cue_kind() {
    assert!(Cli::try_parse_from(["wishwell", "cue", "kazoo"]).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn theme_command_persists_selection() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");

    run_theme("sunset", &db_path).await.unwrap();

    let preferences = open_preferences(&db_path).await.unwrap();
    assert_eq!(preferences.preferences().theme, ThemeId::Sunset);
}

#[tokio::test(flavor = "multi_thread")]
async fn theme_command_rejects_unknown_id() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");

    let error = run_theme("neon", &db_path).await.unwrap_err();
    assert_eq!(error.to_string(), "Unknown theme: neon");

    let preferences = open_preferences(&db_path).await.unwrap();
    assert_eq!(preferences.preferences().theme, ThemeId::Birthday);
}

#[tokio::test(flavor = "multi_thread")]
async fn sound_command_sets_and_toggles() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");

    run_sound(Some(SoundSwitch::Off), &db_path).await.unwrap();
    assert!(!open_preferences(&db_path).await.unwrap().preferences().sound_enabled);

    run_sound(None, &db_path).await.unwrap();
    assert!(open_preferences(&db_path).await.unwrap().preferences().sound_enabled);
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_validates_before_reaching_the_store() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");
    let config = config_with_db(db_path.clone());

    let error = run_submit(&["short".to_string()], &db_path, &config)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CliError::Submission(SubmissionError::TooShort { len: 5, min: 10 })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_without_remote_configuration_fails_visibly() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");
    let config = config_with_db(db_path.clone());

    let error = run_submit(&["a valid website idea".to_string()], &db_path, &config)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CliError::Submission(SubmissionError::RemoteInsertFailed(ref message))
            if message.contains("not configured")
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn local_commands_ignore_broken_remote_settings() {
    let tmp = tempdir().unwrap();
    let db_file = tmp.path().join("prefs.db");
    let lookup = env(&[
        ("SUPABASE_URL", "demo.supabase.co"),
        ("WISHWELL_SUBMIT_TIMEOUT_SECS", "0"),
        ("WISHWELL_DB_PATH", db_file.to_str().unwrap()),
    ]);
    assert!(AppConfig::from_lookup(&lookup).is_err());

    let db_path = resolve_db_path(None, &lookup);
    assert_eq!(db_path, db_file);

    run_theme("ocean", &db_path).await.unwrap();
    run_sound(Some(SoundSwitch::Off), &db_path).await.unwrap();
    let preferences = open_preferences(&db_path).await.unwrap().preferences();
    assert_eq!(preferences.theme, ThemeId::Ocean);
    assert!(!preferences.sound_enabled);

    let cue = tmp.path().join("coin.wav");
    run_cue(CueKind::Coin, Some(&cue)).unwrap();
    assert!(cue.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_rejects_half_configured_remote() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("prefs.db");
    let mut config = config_with_db(db_path.clone());
    config.supabase_url = Some("https://demo.supabase.co".to_string());

    let error = run_submit(&["a valid website idea".to_string()], &db_path, &config)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        CliError::Store(StoreError::InvalidConfiguration(_))
    ));
    assert!(error.to_string().contains("SUPABASE_ANON_KEY"));
}

#[test]
fn cue_command_writes_wav_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("sparkle.wav");

    run_cue(CueKind::Sparkle, Some(&path)).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
}
