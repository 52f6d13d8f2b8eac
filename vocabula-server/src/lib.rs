//! The vocab-tester HTTP server.
//!
//! Two endpoints, single-tenant per process:
//!
//! - `POST /send-vocab` — raw vocab-list text; parsed and held as the
//!   process's pending list.
//! - `POST /session` — a settings object; returns a JSON array of question
//!   objects sampled from the held list.
//!
//! A `GET /health` probe reports liveness. The transport is a plain axum
//! router so tests can drive it in-process.

pub mod error;
pub mod state;

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::info;

use vocabula_rogo::{ask_questions, Settings};

use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/send-vocab", post(handle_send_vocab))
        .route("/session", post(handle_session))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle `POST /send-vocab`.
///
/// The new list replaces the old one atomically, and only after parsing
/// succeeds; concurrent `/session` calls observe either the previous list
/// or the new one, never a half-parsed state.
async fn handle_send_vocab(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<&'static str> {
    info!(bytes = body.len(), "reading vocab list");
    let list = vocabula_lego::read_vocab_file(&body)?;
    info!(words = list.vocab.len(), "vocab list committed");
    *state.vocab.write().await = Some(list);
    Ok("Vocab list received.")
}

/// Handle `POST /session`.
async fn handle_session(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse> {
    let vocab = state.vocab.read().await;
    let Some(list) = vocab.as_ref() else {
        return Err(ServerError::bad_request("Vocab list has not been provided."));
    };

    let value: Value = serde_json::from_str(&body)?;
    let settings = Settings::from_json(&value).map_err(vocabula_rogo::RogoError::from)?;

    info!(
        questions = settings.number_of_questions,
        "sampling session questions"
    );

    // Draws serialize on the process RNG: identical request sequences under
    // a fixed seed produce identical responses.
    let mut rng = state.rng.lock().await;
    let questions = ask_questions(list, &settings, state.synonyms.as_ref(), &mut rng)?;

    let payload: Vec<Value> = questions.iter().map(|q| q.to_json()).collect();
    Ok(Json(payload))
}

/// Handle `GET /health`.
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
