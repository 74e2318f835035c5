//! Service wiring for the desktop shell.

use std::path::Path;
use std::sync::Arc;

use wishwell_core::config::AppConfig;
use wishwell_core::db::{Database, LibSqlPreferenceStorage};
use wishwell_core::remote::SupabaseIdeaStore;
use wishwell_core::services::{IdeaSubmissionFlow, PreferenceStore};
use wishwell_core::sound::AudioSink;
use wishwell_core::{Result, SoundNotifier};

/// Everything the screens need once startup finishes.
pub struct AppServices {
    pub preferences: PreferenceStore<LibSqlPreferenceStorage>,
    pub submissions: IdeaSubmissionFlow<SupabaseIdeaStore>,
    pub notifier: SoundNotifier,
    /// Whether ideas can reach the remote store
    pub remote_configured: bool,
}

impl AppServices {
    pub async fn init(sink: Arc<dyn AudioSink>) -> Result<Self> {
        let config = match AppConfig::from_env() {
            Ok(config) => config,
            Err(error) => {
                tracing::error!("Invalid configuration, using defaults: {}", error);
                AppConfig::from_lookup(|_| None)?
            }
        };

        let database = open_database(&config.db_path).await?;
        let preferences =
            PreferenceStore::load(LibSqlPreferenceStorage::new(database), sink).await?;

        let store = SupabaseIdeaStore::from_config(&config).unwrap_or_else(|error| {
            tracing::error!("Idea storage unavailable: {}", error);
            SupabaseIdeaStore::unconfigured()
        });
        let remote_configured = store.is_configured();
        let notifier = preferences.notifier();
        let submissions = IdeaSubmissionFlow::new(store, notifier.clone(), config.submit_timeout);

        Ok(Self {
            preferences,
            submissions,
            notifier,
            remote_configured,
        })
    }
}

/// Open the preference database, or fall back to memory so the greeting
/// still runs when the data directory is unusable.
async fn open_database(path: &Path) -> Result<Database> {
    match Database::open(path).await {
        Ok(database) => {
            tracing::info!("Preferences stored at {}", path.display());
            Ok(database)
        }
        Err(error) => {
            tracing::warn!(
                "Failed to open {}: {}. Preferences will not persist this session",
                path.display(),
                error
            );
            Database::open_in_memory().await
        }
    }
}
