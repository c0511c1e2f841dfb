//! Note endpoints.
//!
//! | Method | Path              | Success | Failure                 |
//! |--------|-------------------|---------|-------------------------|
//! | GET    | /notes            | 200     | -                       |
//! | GET    | /notes/{name}     | 200     | 404 absent              |
//! | POST   | /write            | 201     | 400 exists, bad body    |
//! | PUT    | /notes/{name}     | 200     | 404 absent, 400 bad body|
//! | DELETE | /notes/{name}     | 200     | 404 absent              |
//!
//! Bodies may be urlencoded, multipart or JSON (see `body.rs`).
//!
//! The existence gate on create, update and delete is checked right before
//! the mutation and is not atomic with it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::http::body::NoteBody;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::Note;

/// Body of `POST /write`.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub note_name: String,
    pub note: String,
}

/// Body of `PUT /notes/{name}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub note_content: String,
}

/// `GET /notes`
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    let notes = state.store.list().await;
    tracing::debug!(count = notes.len(), "Listed notes");
    Json(notes)
}

/// `GET /notes/{name}`
pub async fn get_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    state.store.fetch(&name).await.ok_or(ApiError::NotFound)
}

/// `POST /write`
pub async fn create_note(
    State(state): State<AppState>,
    NoteBody(CreateNote { note_name, note }): NoteBody<CreateNote>,
) -> Result<(StatusCode, String), ApiError> {
    if state.store.exists(&note_name).await {
        tracing::info!(note = %note_name, "Create rejected, note exists");
        return Err(ApiError::AlreadyExists);
    }

    state.store.save(&note_name, &note).await;
    tracing::info!(note = %note_name, "Note created");
    Ok((StatusCode::CREATED, format!("Note '{note_name}' created")))
}

/// `PUT /notes/{name}`
pub async fn update_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
    NoteBody(UpdateNote { note_content }): NoteBody<UpdateNote>,
) -> Result<String, ApiError> {
    if !state.store.exists(&name).await {
        return Err(ApiError::DoesNotExist);
    }

    state.store.save(&name, &note_content).await;
    tracing::info!(note = %name, "Note updated");
    Ok(format!("Note '{name}' updated"))
}

/// `DELETE /notes/{name}`
pub async fn delete_note(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.exists(&name).await {
        return Err(ApiError::DoesNotExist);
    }

    state.store.remove(&name).await;
    tracing::info!(note = %name, "Note deleted");
    Ok(StatusCode::OK)
}
