//! Remote persistence for submitted ideas.

mod supabase;

use thiserror::Error;

use crate::models::IdeaRecord;

pub use supabase::{normalize_rest_url, SupabaseIdeaStore, DEFAULT_IDEAS_TABLE};
pub(crate) use supabase::has_http_scheme;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Idea storage is not configured for this build.")]
    NotConfigured,
    #[error("Invalid idea store configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Idea store API error: {0}")]
    Api(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A durable record store reachable over the network.
#[allow(async_fn_in_trait)]
pub trait IdeaStore {
    /// Insert one idea record. A single attempt; callers decide on retries.
    async fn insert_idea(&self, record: &IdeaRecord) -> StoreResult<()>;
}
