//! The five note operations plus a liveness probe.
//!
//! Each handler follows the same shape: lock the store, load the full
//! collection, operate, save if it mutated, respond. Existence is checked
//! before field validation on update, so an unknown id answers 404 even
//! when the payload is also invalid.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::error::JotterError;
use crate::note::{Note, NoteInput};

use super::{ApiError, AppState};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let store = state.store.lock().await;
    let notes = store.load()?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    input.validate()?;

    let store = state.store.lock().await;
    let mut notes = store.load()?;
    let note = Note::new(input.title, input.body);
    notes.push(note.clone());
    store.save(&notes)?;

    debug!(id = %note.id, "created note");
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let store = state.store.lock().await;
    let notes = store.load()?;
    let note = notes
        .into_iter()
        .find(|n| n.id == id)
        .ok_or(JotterError::NoteNotFound(id))?;
    Ok(Json(note))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, ApiError> {
    let store = state.store.lock().await;
    let mut notes = store.load()?;
    let note = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| JotterError::NoteNotFound(id.clone()))?;

    input.validate()?;
    note.title = input.title;
    note.body = input.body;
    let updated = note.clone();
    store.save(&notes)?;

    debug!(id = %updated.id, "updated note");
    Ok(Json(updated))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store.lock().await;
    let mut notes = store.load()?;
    let before = notes.len();
    notes.retain(|n| n.id != id);
    if notes.len() == before {
        return Err(JotterError::NoteNotFound(id).into());
    }
    store.save(&notes)?;

    debug!(%id, "deleted note");
    Ok(StatusCode::NO_CONTENT)
}
