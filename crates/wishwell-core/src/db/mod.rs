//! Database layer for Wishwell

mod connection;
mod migrations;
mod preference_storage;

pub use connection::Database;
pub use preference_storage::{LibSqlPreferenceStorage, PreferenceStorage};
