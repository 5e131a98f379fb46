//! SQL DDL for initializing the message storage.
//! SQLite-first design; create-if-absent, not a migration system.

/// SQLite schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - the three user-supplied fields, all NOT NULL
/// - `created_at` assigned by the database at insertion time
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;
