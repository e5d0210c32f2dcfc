use notes_core::{Note, User};

use chrono::{DateTime, Utc};

/// A user ready for insertion. The hash is an opaque stand-in; repository
/// tests never verify passwords.
pub fn test_user(username: &str, email: &str) -> User {
    User::new(
        username.to_string(),
        email.to_string(),
        "$2b$04$placeholderplaceholderplace".to_string(),
    )
}

pub fn test_note(user_id: i64, title: &str, content: &str) -> Note {
    Note::new(user_id, title.to_string(), content.to_string())
}

/// A note with explicit timestamps, for ordering tests
pub fn backdated_note(
    user_id: i64,
    title: &str,
    content: &str,
    created_at: DateTime<Utc>,
) -> Note {
    Note {
        id: 0,
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        created_at,
        updated_at: created_at,
    }
}
