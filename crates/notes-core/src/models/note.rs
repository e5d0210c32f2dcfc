use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identity; 0 until the row exists
    pub id: i64,
    /// Owning user; immutable for the life of the note
    pub user_id: i64,

    pub title: String,
    pub content: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// New note with both timestamps set to the same instant.
    pub fn new(user_id: i64, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
