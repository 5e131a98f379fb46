use sqlx::{Pool, Sqlite};

use crate::db::models::StoredMessage;
use crate::db::schema::SQLITE_INIT;
use crate::error::BuzonError;
use crate::types::submission::Submission;

pub type SqlitePool = Pool<Sqlite>;

/// Storage accessor for contact messages. Cloning shares the pool; each
/// operation checks a connection out for the duration of one statement and
/// returns it on every exit path.
#[derive(Clone)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), BuzonError> {
        // sqlx::query runs one statement at a time; split the DDL.
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Append one row; id and `created_at` are server-assigned. Commits
    /// synchronously, no partial-write recovery.
    pub async fn insert(&self, submission: &Submission) -> Result<i64, BuzonError> {
        let result = sqlx::query("INSERT INTO messages (name, email, message) VALUES (?, ?, ?)")
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.message)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn count(&self) -> Result<i64, BuzonError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    pub async fn fetch_all(&self) -> Result<Vec<StoredMessage>, BuzonError> {
        let rows = sqlx::query_as::<_, StoredMessage>(
            "SELECT id, name, email, message, created_at FROM messages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
