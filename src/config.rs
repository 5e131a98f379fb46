use std::path::PathBuf;

use figment::{Figment, providers::Env};
use serde::Deserialize;

use crate::error::BuzonError;

/// Secret key shipped for local development. Startup warns when it is in use.
pub const INSECURE_DEFAULT_SECRET: &str = "dev-key-for-development-environment";

/// Process configuration, loaded once at startup from the environment
/// (plus `.env` via dotenvy) and passed by reference to the collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Mail account identity. Also the owner address notifications go to.
    pub smtp_user: String,
    /// Mail account credential (app password for Gmail-style relays).
    pub smtp_password: String,
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_secret_key() -> String {
    INSECURE_DEFAULT_SECRET.to_string()
}

fn default_database_url() -> String {
    "sqlite:messages.db".to_string()
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("message_backups")
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

impl Config {
    /// Extract the configuration from environment variables.
    /// Missing `SMTP_USER` or `SMTP_PASSWORD` is fatal and reported by name.
    pub fn from_env() -> Result<Self, BuzonError> {
        Figment::new()
            .merge(Env::raw())
            .extract()
            .map_err(|e| BuzonError::Config(e.to_string()))
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn loglevel(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smtp_user: String::new(),
            smtp_password: String::new(),
            smtp_server: default_smtp_server(),
            smtp_port: default_smtp_port(),
            secret_key: default_secret_key(),
            debug: false,
            database_url: default_database_url(),
            backup_dir: default_backup_dir(),
            bind_addr: default_bind_addr(),
        }
    }
}
