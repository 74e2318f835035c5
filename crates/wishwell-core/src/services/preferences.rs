//! Preference store: the single writer of visitor preferences.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::db::PreferenceStorage;
use crate::models::{Preferences, ThemeDefinition, ThemeId};
use crate::sound::{AudioSink, SoundKind, SoundNotifier};
use crate::themes::ThemeRegistry;
use crate::Result;

/// Storage key for the selected theme id.
pub const THEME_KEY: &str = "birthday-theme";
/// Storage key for the sound flag (`"true"` / `"false"`).
pub const SOUND_KEY: &str = "birthday-sound";

/// Gap between enabling sound and its confirmation click, so the click does
/// not land on top of the toggle button's own press.
pub const SOUND_CONFIRM_DELAY_MS: u64 = 100;

/// Loads preferences once, then persists every change before publishing it.
///
/// Readers never touch storage: they read the live value through
/// [`PreferenceStore::preferences`] or a [`PreferenceStore::subscribe`]
/// receiver. Every setter writes to storage first, so the live value always
/// matches the last successfully persisted choice.
pub struct PreferenceStore<S: PreferenceStorage> {
    storage: S,
    live: watch::Sender<Preferences>,
    notifier: SoundNotifier,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Restore persisted preferences, falling back to defaults for anything
    /// missing or unreadable, and bind a sound notifier to the live value.
    pub async fn load(storage: S, sink: Arc<dyn AudioSink>) -> Result<Self> {
        let preferences = read_preferences(&storage).await;
        tracing::debug!(
            "Loaded preferences: theme={}, sound_enabled={}",
            preferences.theme,
            preferences.sound_enabled
        );

        let (live, receiver) = watch::channel(preferences);
        let notifier = SoundNotifier::new(receiver, sink)?;
        Ok(Self {
            storage,
            live,
            notifier,
        })
    }

    /// Current preferences.
    pub fn preferences(&self) -> Preferences {
        *self.live.borrow()
    }

    /// Definition of the selected theme.
    pub fn theme(&self) -> &'static ThemeDefinition {
        ThemeRegistry::definition(self.preferences().theme)
    }

    /// Receiver that observes every published change.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.live.subscribe()
    }

    /// Notifier gated by the live sound preference.
    pub fn notifier(&self) -> SoundNotifier {
        self.notifier.clone()
    }

    pub async fn set_theme(&self, id: ThemeId) -> Result<()> {
        self.storage.set(THEME_KEY, id.as_str()).await?;
        self.live.send_modify(|preferences| preferences.theme = id);
        tracing::info!("Theme set to {}", id);
        Ok(())
    }

    /// Select a theme by its string id.
    ///
    /// Ids outside the catalog fail with `ThemeError::UnknownTheme` and leave
    /// the current theme unchanged.
    pub async fn set_theme_named(&self, id: &str) -> Result<ThemeId> {
        let id: ThemeId = id.parse()?;
        self.set_theme(id).await?;
        Ok(id)
    }

    /// Persist the sound flag.
    ///
    /// Turning sound on plays a confirmation click after
    /// [`SOUND_CONFIRM_DELAY_MS`].
    pub async fn set_sound_enabled(&self, enabled: bool) -> Result<()> {
        let was_enabled = self.preferences().sound_enabled;
        self.storage
            .set(SOUND_KEY, if enabled { "true" } else { "false" })
            .await?;
        self.live
            .send_modify(|preferences| preferences.sound_enabled = enabled);
        tracing::info!("Sound {}", if enabled { "enabled" } else { "disabled" });

        if enabled && !was_enabled {
            let notifier = self.notifier.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(SOUND_CONFIRM_DELAY_MS)).await;
                notifier.notify(SoundKind::Click);
            });
        }
        Ok(())
    }

    /// Flip the sound flag and return the new value.
    pub async fn toggle_sound(&self) -> Result<bool> {
        let enabled = !self.preferences().sound_enabled;
        self.set_sound_enabled(enabled).await?;
        Ok(enabled)
    }
}

async fn read_preferences<S: PreferenceStorage>(storage: &S) -> Preferences {
    let defaults = Preferences::default();

    let theme = match storage.get(THEME_KEY).await {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|error| {
            tracing::warn!("{}; falling back to {}", error, defaults.theme);
            defaults.theme
        }),
        Ok(None) => defaults.theme,
        Err(error) => {
            tracing::warn!("Failed to read stored theme: {}", error);
            defaults.theme
        }
    };

    // Anything except an explicit "false" keeps sound on.
    let sound_enabled = match storage.get(SOUND_KEY).await {
        Ok(Some(raw)) => raw.trim() != "false",
        Ok(None) => defaults.sound_enabled,
        Err(error) => {
            tracing::warn!("Failed to read stored sound flag: {}", error);
            defaults.sound_enabled
        }
    };

    Preferences {
        theme,
        sound_enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, LibSqlPreferenceStorage};
    use crate::sound::RecordingSink;
    use crate::{Error, ThemeError};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    async fn storage() -> LibSqlPreferenceStorage {
        LibSqlPreferenceStorage::new(Database::open_in_memory().await.unwrap())
    }

    async fn load(
        storage: LibSqlPreferenceStorage,
    ) -> (PreferenceStore<LibSqlPreferenceStorage>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let store = PreferenceStore::load(storage, sink.clone()).await.unwrap();
        (store, sink)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn first_load_uses_defaults() {
        let (store, _sink) = load(storage().await).await;
        assert_eq!(store.preferences(), Preferences::default());
        assert_eq!(store.theme().id, ThemeId::Birthday);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn every_theme_survives_reload() {
        let storage = storage().await;
        for id in ThemeId::ALL {
            let (store, _sink) = load(storage.clone()).await;
            store.set_theme(id).await.unwrap();

            let (reloaded, _sink) = load(storage.clone()).await;
            assert_eq!(reloaded.preferences().theme, id);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unknown_theme_name_leaves_prior_theme() {
        let storage = storage().await;
        let (store, _sink) = load(storage.clone()).await;
        store.set_theme(ThemeId::Sunset).await.unwrap();

        let error = store.set_theme_named("neon").await.unwrap_err();
        assert!(matches!(
            error,
            Error::Theme(ThemeError::UnknownTheme(ref id)) if id == "neon"
        ));
        assert_eq!(store.preferences().theme, ThemeId::Sunset);

        let (reloaded, _sink) = load(storage).await;
        assert_eq!(reloaded.preferences().theme, ThemeId::Sunset);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn set_theme_named_accepts_catalog_ids() {
        let (store, _sink) = load(storage().await).await;
        assert_eq!(store.set_theme_named("Ocean").await.unwrap(), ThemeId::Ocean);
        assert_eq!(store.theme().name, "Ocean Breeze");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sound_flag_survives_file_backed_reload() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("wishwell.db");

        {
            let storage = LibSqlPreferenceStorage::new(Database::open(&db_path).await.unwrap());
            let (store, _sink) = load(storage).await;
            store.set_sound_enabled(false).await.unwrap();
        }

        let storage = LibSqlPreferenceStorage::new(Database::open(&db_path).await.unwrap());
        let (reloaded, _sink) = load(storage).await;
        assert!(!reloaded.preferences().sound_enabled);
        assert_eq!(reloaded.preferences().theme, ThemeId::Birthday);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_stored_values_fall_back_to_defaults() {
        let storage = storage().await;
        storage.set(THEME_KEY, "not-a-theme").await.unwrap();
        storage.set(SOUND_KEY, "maybe").await.unwrap();

        let (store, _sink) = load(storage).await;
        assert_eq!(store.preferences(), Preferences::default());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn enabling_sound_plays_confirmation_click() {
        let (store, sink) = load(storage().await).await;

        store.set_sound_enabled(false).await.unwrap();
        assert!(sink.kinds().is_empty());

        store.set_sound_enabled(true).await.unwrap();
        assert!(sink.kinds().is_empty(), "confirmation waits for the toggle press");
        tokio::time::sleep(Duration::from_millis(SOUND_CONFIRM_DELAY_MS * 3)).await;
        assert_eq!(sink.kinds(), vec![SoundKind::Click]);

        // Already on: no second confirmation.
        store.set_sound_enabled(true).await.unwrap();
        tokio::time::sleep(Duration::from_millis(SOUND_CONFIRM_DELAY_MS * 3)).await;
        assert_eq!(sink.kinds(), vec![SoundKind::Click]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn toggle_sound_flips_and_persists() {
        let storage = storage().await;
        let (store, _sink) = load(storage.clone()).await;

        assert!(!store.toggle_sound().await.unwrap());
        assert!(store.toggle_sound().await.unwrap());
        assert!(!store.toggle_sound().await.unwrap());

        let (reloaded, _sink) = load(storage).await;
        assert!(!reloaded.preferences().sound_enabled);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn subscribers_see_published_changes() {
        let (store, _sink) = load(storage().await).await;
        let mut receiver = store.subscribe();

        store.set_theme(ThemeId::Galaxy).await.unwrap();
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().theme, ThemeId::Galaxy);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn notifier_respects_disabled_sound() {
        let (store, sink) = load(storage().await).await;
        let notifier = store.notifier();

        store.set_sound_enabled(false).await.unwrap();
        notifier.notify(SoundKind::Error);
        notifier.notify(SoundKind::Success);
        assert!(sink.kinds().is_empty());
    }
}
