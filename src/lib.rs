pub mod backup;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod router;
pub mod types;

pub use backup::BackupWriter;
pub use error::BuzonError;
pub use mail::Mailer;
pub use types::submission::{ContactForm, FormResponse, Submission};
