use serde::Deserialize;

/// Request body for exchanging credentials for a token
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
