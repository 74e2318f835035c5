//! Runtime configuration for client apps.
//!
//! Provides a unified `AppConfig` used by the desktop shell and the CLI to
//! discover the Supabase endpoint, the ideas table, the submission timeout,
//! and the local preference database path.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::remote::{has_http_scheme, DEFAULT_IDEAS_TABLE};
use crate::{Error, Result};

/// Remote insert timeout unless `WISHWELL_SUBMIT_TIMEOUT_SECS` overrides it.
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 10;

const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
const ENV_IDEAS_TABLE: &str = "WISHWELL_IDEAS_TABLE";
const ENV_SUBMIT_TIMEOUT_SECS: &str = "WISHWELL_SUBMIT_TIMEOUT_SECS";
const ENV_DB_PATH: &str = "WISHWELL_DB_PATH";

/// Resolved client configuration.
///
/// Only public values belong here: the Supabase anon key is safe to ship,
/// service-role keys are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub ideas_table: String,
    #[serde(with = "duration_secs")]
    pub submit_timeout: Duration,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    ///
    /// Values are trimmed and blanks are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| env_value(&lookup, key);

        let supabase_url = get(ENV_SUPABASE_URL);
        if let Some(url) = &supabase_url {
            if !has_http_scheme(url) {
                return Err(Error::InvalidInput(format!(
                    "{ENV_SUPABASE_URL} must include http:// or https://"
                )));
            }
        }

        let submit_timeout = match get(ENV_SUBMIT_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    Error::InvalidInput(format!(
                        "{ENV_SUBMIT_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::InvalidInput(format!(
                        "{ENV_SUBMIT_TIMEOUT_SECS} must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key: get(ENV_SUPABASE_ANON_KEY),
            ideas_table: get(ENV_IDEAS_TABLE).unwrap_or_else(|| DEFAULT_IDEAS_TABLE.to_string()),
            submit_timeout,
            db_path: Self::db_path_from_lookup(&lookup),
        })
    }

    /// Resolve only the preference database path.
    ///
    /// Hosts that never talk to the remote store use this so a malformed
    /// Supabase or timeout value cannot block local preference commands.
    pub fn db_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        env_value(&lookup, ENV_DB_PATH).map_or_else(default_db_path, PathBuf::from)
    }

    /// Whether both Supabase values are present.
    pub const fn is_remote_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }
}

/// Trimmed value for `key`, with blanks treated as unset.
fn env_value(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key)?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Default preference database location under the platform data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("wishwell")
        .join("wishwell.db")
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
