use serde::Deserialize;

/// Request body for replacing a note's title and content
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}
