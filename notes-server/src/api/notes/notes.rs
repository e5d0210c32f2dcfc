use crate::api::error::{ApiError, Result};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::notes::create_note_request::CreateNoteRequest;
use crate::api::notes::list_notes_query::ListNotesQuery;
use crate::api::notes::note_list_response::NoteListResponse;
use crate::api::notes::note_response::NoteResponse;
use crate::api::notes::update_note_request::UpdateNoteRequest;
use crate::services::NoteService;
use crate::state::AppState;

use notes_core::validation;
use notes_db::NoteRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// GET /api/v1/notes
pub async fn list_notes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<NoteListResponse>> {
    let service = NoteService::new(NoteRepository::new(state.pool.clone()));
    let notes = service.list(user.id, query).await?;

    Ok(Json(NoteListResponse { notes }))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<NoteResponse>> {
    let service = NoteService::new(NoteRepository::new(state.pool.clone()));

    match service.get(id, user.id).await? {
        Some(note) => Ok(Json(NoteResponse { note })),
        None => Err(not_found(id)),
    }
}

/// POST /api/v1/notes
pub async fn create_note(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>)> {
    validation::validate_title(&req.title)?;
    validation::validate_content(&req.content)?;

    let service = NoteService::new(NoteRepository::new(state.pool.clone()));
    let note = service.create(user.id, req).await?;

    Ok((StatusCode::CREATED, Json(NoteResponse { note })))
}

/// PUT /api/v1/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>> {
    validation::validate_title(&req.title)?;
    validation::validate_content(&req.content)?;

    let service = NoteService::new(NoteRepository::new(state.pool.clone()));

    match service.update(id, user.id, req).await? {
        Some(note) => Ok(Json(NoteResponse { note })),
        None => Err(not_found(id)),
    }
}

/// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let service = NoteService::new(NoteRepository::new(state.pool.clone()));

    if service.delete(id, user.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// Another user's note and a nonexistent note are indistinguishable
#[track_caller]
fn not_found(id: i64) -> ApiError {
    ApiError::NotFound {
        message: format!("Note {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}
