use crate::api::error::Result;
use crate::api::notes::create_note_request::CreateNoteRequest;
use crate::api::notes::list_notes_query::ListNotesQuery;
use crate::api::notes::note_dto::NoteDto;
use crate::api::notes::update_note_request::UpdateNoteRequest;

use notes_core::models::note::Note;
use notes_db::{NoteListFilter, NoteStore};

use chrono::Utc;

/// Note CRUD scoped to a single owner.
///
/// Every operation takes the caller's id and the store enforces the
/// ownership filter, so one user's notes are invisible to another.
pub struct NoteService<N> {
    notes: N,
}

impl<N: NoteStore> NoteService<N> {
    pub fn new(notes: N) -> Self {
        Self { notes }
    }

    pub async fn create(&self, owner_id: i64, req: CreateNoteRequest) -> Result<NoteDto> {
        let mut note = Note::new(owner_id, req.title, req.content);
        note.id = self.notes.create(&note).await?;

        Ok(note.into())
    }

    pub async fn list(&self, owner_id: i64, query: ListNotesQuery) -> Result<Vec<NoteDto>> {
        let filter = NoteListFilter {
            // Blank search means no search
            search: query.search.filter(|s| !s.is_empty()),
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        };

        let notes = self.notes.find_all_by_owner(owner_id, &filter).await?;

        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    pub async fn get(&self, id: i64, owner_id: i64) -> Result<Option<NoteDto>> {
        let note = self.notes.find_by_id(id, owner_id).await?;

        Ok(note.map(NoteDto::from))
    }

    /// Replace a note's title and content, refreshing `updated_at`.
    /// Returns `Ok(None)` when the note does not exist or belongs to
    /// someone else.
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        req: UpdateNoteRequest,
    ) -> Result<Option<NoteDto>> {
        let Some(mut note) = self.notes.find_by_id(id, owner_id).await? else {
            return Ok(None);
        };

        note.title = req.title;
        note.content = req.content;
        note.updated_at = Utc::now();

        self.notes.update(&note).await?;

        Ok(Some(note.into()))
    }

    /// Returns false when nothing was deleted, so repeated deletes of
    /// the same id report not-found after the first.
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<bool> {
        let deleted = self.notes.delete(id, owner_id).await?;

        Ok(deleted)
    }
}
