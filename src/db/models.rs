use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted contact message as stored in the `messages` table.
/// `created_at` is assigned by SQLite (`CURRENT_TIMESTAMP`, UTC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct StoredMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}
