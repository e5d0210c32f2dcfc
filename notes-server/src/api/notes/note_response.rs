use crate::api::notes::note_dto::NoteDto;

use serde::{Deserialize, Serialize};

/// Response envelope for a single note
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteResponse {
    pub note: NoteDto,
}
