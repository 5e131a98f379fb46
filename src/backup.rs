use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::BuzonError;
use crate::types::submission::Submission;

/// One backup line: `{name, email, message, timestamp}`.
#[derive(Serialize)]
struct BackupRecord<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    timestamp: String,
}

/// Appends one JSON line per submission to a file named by the current UTC
/// calendar date. Best-effort duplicate of the primary store; no file
/// locking, interleaving relies on filesystem append semantics.
#[derive(Clone)]
pub struct BackupWriter {
    dir: PathBuf,
}

impl BackupWriter {
    /// Create the backup directory if missing.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, BuzonError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the backup file for a given timestamp's calendar date.
    pub fn file_for(&self, at: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!("messages_{}.json", at.format("%Y-%m-%d")))
    }

    pub fn append(&self, submission: &Submission) -> Result<PathBuf, BuzonError> {
        self.append_at(submission, Utc::now())
    }

    pub fn append_at(
        &self,
        submission: &Submission,
        at: DateTime<Utc>,
    ) -> Result<PathBuf, BuzonError> {
        let record = BackupRecord {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            timestamp: at.to_rfc3339(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let path = self.file_for(at);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use chrono::TimeZone;
    use serde_json::Value;

    use super::*;

    fn temp_backup_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("buzon-backup-{}-{}", std::process::id(), nanos));
        dir
    }

    fn submission() -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn appends_one_json_line_per_submission() {
        let dir = temp_backup_dir();
        let writer = BackupWriter::new(&dir).expect("failed to create backup dir");
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let path = writer.append_at(&submission(), at).expect("append failed");
        writer.append_at(&submission(), at).expect("append failed");

        let contents = fs::read_to_string(&path).expect("backup file unreadable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let record: Value = serde_json::from_str(lines[0]).expect("backup line is not JSON");
        assert_eq!(record["name"], "Jane Doe");
        assert_eq!(record["email"], "jane@example.com");
        assert_eq!(record["message"], "Hello");
        assert_eq!(record["timestamp"], "2026-03-14T09:26:53+00:00");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn segments_files_by_calendar_date() {
        let dir = temp_backup_dir();
        let writer = BackupWriter::new(&dir).expect("failed to create backup dir");

        let day_one = Utc.with_ymd_and_hms(2026, 1, 1, 23, 59, 59).unwrap();
        let day_two = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 1).unwrap();
        let first = writer.append_at(&submission(), day_one).expect("append failed");
        let second = writer.append_at(&submission(), day_two).expect("append failed");

        assert_ne!(first, second);
        assert!(first.ends_with("messages_2026-01-01.json"));
        assert!(second.ends_with("messages_2026-01-02.json"));

        let _ = fs::remove_dir_all(&dir);
    }
}
