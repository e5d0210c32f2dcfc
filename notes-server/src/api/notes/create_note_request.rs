use serde::Deserialize;

/// Request body for creating a note
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    /// Content may be omitted; an absent field means an empty note body
    #[serde(default)]
    pub content: String,
}
