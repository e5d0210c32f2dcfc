use notes_core::models::note::Note;

use serde::{Deserialize, Serialize};

/// Wire representation of a note. Owner id stays server-side; the
/// bearer token already scopes every request to its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Creation time as unix seconds (UTC)
    pub created_at: i64,
    /// Last modification time as unix seconds (UTC)
    pub updated_at: i64,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at.timestamp(),
            updated_at: note.updated_at.timestamp(),
        }
    }
}
