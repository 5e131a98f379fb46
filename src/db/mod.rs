//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage accessor over an sqlx pool

pub mod models;
pub mod schema;
pub mod sqlite;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::BuzonError;

pub use models::StoredMessage;
pub use schema::SQLITE_INIT;
pub use sqlite::{MessageStore, SqlitePool};

/// Open (creating the file if missing) and initialize the message store.
pub async fn spawn(database_url: &str) -> Result<MessageStore, BuzonError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let store = MessageStore::new(pool);
    store.init_schema().await?;
    Ok(store)
}
