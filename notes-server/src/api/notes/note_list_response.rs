use crate::api::notes::note_dto::NoteDto;

use serde::{Deserialize, Serialize};

/// Response envelope for listing notes
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteDto>,
}
