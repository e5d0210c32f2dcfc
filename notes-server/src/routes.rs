use crate::state::AppState;
use crate::{create_note, delete_note, get_note, health, list_notes, login, register, update_note};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Credential endpoints (anonymous)
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        // Note endpoints (bearer token required)
        .route("/api/v1/notes", get(list_notes).post(create_note))
        .route(
            "/api/v1/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
