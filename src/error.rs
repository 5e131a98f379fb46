use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::types::submission::FormResponse;

#[derive(Debug, ThisError)]
pub enum BuzonError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(&'static str),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid mail address: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    #[error("failed to build mail message: {0}")]
    MailBuild(#[from] lettre::error::Error),

    #[error("backup I/O error: {0}")]
    BackupIo(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Single result-mapping layer for the request pipeline: the first failing
/// stage is converted to a response here, with logging as a side effect.
/// Caller-visible messages never carry internal error detail.
impl IntoResponse for BuzonError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            BuzonError::Validation(reason) => (StatusCode::BAD_REQUEST, *reason),
            BuzonError::Database(e) => {
                error!(error = %e, "database error while saving message");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error saving message")
            }
            other => {
                error!(error = %other, "unexpected error while processing form");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing your message. Please try again later.",
                )
            }
        };
        (status, Json(FormResponse::failure(message))).into_response()
    }
}
