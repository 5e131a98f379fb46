use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::BuzonError;
use crate::router::BuzonState;
use crate::types::submission::{ContactForm, FormResponse};

/// `POST /enviar-formulario`.
///
/// Sequence within one request: validate, store, notify, back up, respond.
/// Validation and storage failures short-circuit through `BuzonError`;
/// notification and backup are best-effort and never alter the response.
pub async fn submit(
    State(state): State<BuzonState>,
    Form(form): Form<ContactForm>,
) -> Result<Json<FormResponse>, BuzonError> {
    let submission = form.validate()?;

    let id = state.store.insert(&submission).await?;
    debug!(id, "message stored");

    if let Err(e) = state.mailer.notify(&submission).await {
        warn!(error = %e, "notification email failed");
    }
    if let Err(e) = state.backup.append(&submission) {
        warn!(error = %e, "backup write failed");
    }

    Ok(Json(FormResponse::success(
        "Your message has been sent successfully. Thank you for contacting me!",
    )))
}

/// `GET /test-smtp`: diagnostic connectivity check against the configured
/// relay. The error string is surfaced to the caller; this endpoint exists
/// for operator debugging, not end users.
pub async fn test_smtp(State(state): State<BuzonState>) -> Response {
    match state.mailer.test_connection().await {
        Ok(true) => (StatusCode::OK, "SMTP connection successful").into_response(),
        Ok(false) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "SMTP connection error: server rejected the session".to_string(),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("SMTP connection error: {e}"),
        )
            .into_response(),
    }
}
