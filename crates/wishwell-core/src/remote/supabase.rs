//! Supabase (PostgREST) idea store.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{IdeaStore, StoreError, StoreResult};
use crate::config::AppConfig;
use crate::models::IdeaRecord;

/// Table that receives ideas unless configured otherwise.
pub const DEFAULT_IDEAS_TABLE: &str = "wishes";

/// Longest slice of a non-JSON error body kept in messages.
const MAX_ERROR_BODY_CHARS: usize = 180;

#[derive(Clone)]
struct Endpoint {
    insert_url: String,
    anon_key: String,
}

/// Inserts idea records through the Supabase REST API.
#[derive(Clone)]
pub struct SupabaseIdeaStore {
    endpoint: Option<Endpoint>,
    client: Client,
}

impl SupabaseIdeaStore {
    pub fn new(
        url: impl AsRef<str>,
        anon_key: impl Into<String>,
        table: impl AsRef<str>,
    ) -> StoreResult<Self> {
        let rest_url = normalize_rest_url(url.as_ref())?;
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(StoreError::InvalidConfiguration(
                "Supabase anon key must not be empty",
            ));
        }
        let table = table.as_ref().trim();
        if table.is_empty() {
            return Err(StoreError::InvalidConfiguration(
                "Ideas table name must not be empty",
            ));
        }

        Ok(Self {
            endpoint: Some(Endpoint {
                insert_url: format!("{rest_url}/{table}"),
                anon_key,
            }),
            client: Client::builder().build()?,
        })
    }

    /// Store that rejects every insert with `StoreError::NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            endpoint: None,
            client: Client::new(),
        }
    }

    /// Build from resolved app configuration.
    ///
    /// Missing credentials yield an unconfigured store so the experience
    /// still runs; submissions then fail visibly. Setting only one of the
    /// two is a configuration error.
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(key)) => Self::new(url, key.clone(), &config.ideas_table),
            (None, None) => {
                tracing::warn!("Supabase is not configured; idea submissions will fail");
                Ok(Self::unconfigured())
            }
            _ => Err(StoreError::InvalidConfiguration(
                "SUPABASE_URL and SUPABASE_ANON_KEY must both be set",
            )),
        }
    }

    pub const fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl IdeaStore for SupabaseIdeaStore {
    async fn insert_idea(&self, record: &IdeaRecord) -> StoreResult<()> {
        let Some(endpoint) = &self.endpoint else {
            return Err(StoreError::NotConfigured);
        };

        let response = self
            .client
            .post(&endpoint.insert_url)
            .header("apikey", &endpoint.anon_key)
            .bearer_auth(&endpoint.anon_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(parse_api_error(status, &body)));
        }

        Ok(())
    }
}

pub(crate) fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Normalize a Supabase project URL to its REST base (`.../rest/v1`).
pub fn normalize_rest_url(url: &str) -> StoreResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(StoreError::InvalidConfiguration(
            "Supabase URL must not be empty",
        ));
    }
    if !has_http_scheme(trimmed) {
        return Err(StoreError::InvalidConfiguration(
            "Supabase URL must include http:// or https://",
        ));
    }
    if trimmed.ends_with("/rest/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/rest/v1"))
    }
}

#[derive(Debug, Deserialize)]
struct PostgrestErrorResponse {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    error: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<PostgrestErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.error)
            .or(payload.details)
            .or(payload.hint)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let excerpt: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    if excerpt.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", excerpt, status.as_u16())
    }
}
