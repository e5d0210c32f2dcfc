use crate::api::error::ApiError;
use crate::state::AppState;

use notes_auth::AuthError;

use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Authenticated caller extracted from the `Authorization: Bearer` header.
///
/// Handlers that take an `AuthUser` argument reject requests with a
/// missing, malformed, expired, or tampered token before the handler
/// body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let state = state.clone();
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;
            let id = claims.user_id()?;

            Ok(AuthUser {
                id,
                email: claims.email,
                username: claims.username,
            })
        }
    }
}
