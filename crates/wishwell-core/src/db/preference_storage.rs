//! Durable key-value storage for visitor preferences

use std::sync::Arc;

use super::Database;
use crate::error::Result;

/// Trait for preference key-value storage operations (async)
#[allow(async_fn_in_trait)]
pub trait PreferenceStorage {
    /// Read a stored value, `None` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// libSQL implementation of `PreferenceStorage`
#[derive(Clone)]
pub struct LibSqlPreferenceStorage {
    db: Arc<Database>,
}

impl LibSqlPreferenceStorage {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}

impl PreferenceStorage for LibSqlPreferenceStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .db
            .connection()
            .query("SELECT value FROM preferences WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
                [key, value],
            )
            .await?;
        Ok(())
    }
}
