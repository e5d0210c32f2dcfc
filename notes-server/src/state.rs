use notes_auth::{JwtValidator, TokenIssuer};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, read-only after startup.
///
/// The core holds no other in-process state: every request runs against the
/// pool independently.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub bcrypt_cost: u32,
}
