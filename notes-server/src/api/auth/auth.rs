use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::error::{ApiError, Result};
use crate::services::AuthService;
use crate::state::AppState;

use notes_core::validation;
use notes_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/v1/auth/register
///
/// Creates an account and returns a signed token. A taken email or
/// username yields 409 without revealing which of the two collided.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    validation::validate_username(&req.username)?;
    validation::validate_email(&req.email)?;
    validation::validate_password(&req.password)?;

    let service = AuthService::new(
        UserRepository::new(state.pool.clone()),
        state.token_issuer.clone(),
        state.bcrypt_cost,
    );

    match service.register(req).await? {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::Conflict {
            message: "Email or username already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// POST /api/v1/auth/login
///
/// Exchanges credentials for a signed token. Unknown email and wrong
/// password return the same 401 body.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let service = AuthService::new(
        UserRepository::new(state.pool.clone()),
        state.token_issuer.clone(),
        state.bcrypt_cost,
    );

    match service.login(req).await? {
        Some(response) => Ok(Json(response)),
        None => Err(ApiError::Unauthorized {
            message: "Invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
