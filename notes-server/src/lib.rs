pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    notes::{
        create_note_request::CreateNoteRequest,
        list_notes_query::ListNotesQuery,
        note_dto::NoteDto,
        note_list_response::NoteListResponse,
        note_response::NoteResponse,
        notes::{create_note, delete_note, get_note, list_notes, update_note},
        update_note_request::UpdateNoteRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::services::{AuthService, NoteService};
pub use crate::state::AppState;
