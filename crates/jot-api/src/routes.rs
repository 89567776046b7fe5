use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use jot_core::backend::{AckEnvelope, FetchEnvelope};
use jot_core::{JsonFileStore, Note, NoteId, PersistenceBackend};

use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    // One store per process; the lock serializes writes so a fetch issued
    // after a completed write always observes it.
    backend: Arc<Mutex<JsonFileStore>>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let backend = JsonFileStore::open(&config.data_dir, &config.collection);
        Self {
            config,
            backend: Arc::new(Mutex::new(backend)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<FetchEnvelope>, ApiError> {
    let backend = state.backend.lock().await;
    let notes = backend.load().await?;
    Ok(Json(FetchEnvelope {
        success: true,
        notes,
        message: None,
    }))
}

async fn create_note(
    State(state): State<AppState>,
    Json(note): Json<Note>,
) -> Result<Json<AckEnvelope>, ApiError> {
    let note = validated(note)?;

    let backend = state.backend.lock().await;
    backend.insert(&note).await?;
    tracing::info!(id = %note.id, "note stored");
    Ok(Json(ack("stored")))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut note): Json<Note>,
) -> Result<Json<AckEnvelope>, ApiError> {
    note.id = parse_note_id(&id)?;
    let note = validated(note)?;

    let backend = state.backend.lock().await;
    backend.update(&note).await?;
    tracing::info!(id = %note.id, "note updated");
    Ok(Json(ack("updated")))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AckEnvelope>, ApiError> {
    let id = parse_note_id(&id)?;

    let backend = state.backend.lock().await;
    backend.remove(&id).await?;
    tracing::info!(%id, "note deleted");
    Ok(Json(ack("deleted")))
}

fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid note id: {raw}")))
}

fn validated(note: Note) -> Result<Note, ApiError> {
    if note.content.trim().is_empty() {
        return Err(ApiError::bad_request("content must not be empty"));
    }
    Ok(note)
}

fn ack(message: &str) -> AckEnvelope {
    AckEnvelope {
        success: true,
        message: Some(message.to_string()),
    }
}
