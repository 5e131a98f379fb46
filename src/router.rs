use axum::{
    Router,
    routing::{get, post},
};

use crate::backup::BackupWriter;
use crate::db::MessageStore;
use crate::handlers;
use crate::mail::Mailer;

/// Shared application state: the three collaborators of the form pipeline.
#[derive(Clone)]
pub struct BuzonState {
    pub store: MessageStore,
    pub mailer: Mailer,
    pub backup: BackupWriter,
}

impl BuzonState {
    pub fn new(store: MessageStore, mailer: Mailer, backup: BackupWriter) -> Self {
        Self {
            store,
            mailer,
            backup,
        }
    }
}

pub fn buzon_router(state: BuzonState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/certificados", get(handlers::pages::certificados))
        .route("/test-smtp", get(handlers::contact::test_smtp))
        .route("/enviar-formulario", post(handlers::contact::submit))
        .with_state(state)
}
