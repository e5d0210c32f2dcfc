use chrono::{DateTime, Utc};

/// A registered account.
///
/// Deliberately not `Serialize`: the password hash must never reach a wire
/// format. API-facing shapes live in the server crate's DTOs.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identity; 0 until the row exists
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
