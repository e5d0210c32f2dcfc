pub mod note_repository;
pub mod user_repository;

use crate::Result as DbErrorResult;

use notes_core::{Note, User};

use async_trait::async_trait;

/// Search and ordering options for a note listing.
///
/// `sort_by` and `sort_order` are passed through as raw request values; the
/// store resolves unrecognized ones to the `created_at DESC` fallback.
#[derive(Debug, Clone, Default)]
pub struct NoteListFilter {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Contract for the user store. One SQL statement per operation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>>;
    /// Insert and return the store-assigned id
    async fn create(&self, user: &User) -> DbErrorResult<i64>;
}

/// Contract for the note store.
///
/// Every read/update/delete carries the owner inside the query itself, so a
/// note is invisible and unmodifiable to anyone but its owner.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: &NoteListFilter,
    ) -> DbErrorResult<Vec<Note>>;
    async fn find_by_id(&self, id: i64, owner_id: i64) -> DbErrorResult<Option<Note>>;
    /// Insert and return the store-assigned id
    async fn create(&self, note: &Note) -> DbErrorResult<i64>;
    /// True when a row matching id and owner was rewritten
    async fn update(&self, note: &Note) -> DbErrorResult<bool>;
    /// True when a row matching id and owner was removed
    async fn delete(&self, id: i64, owner_id: i64) -> DbErrorResult<bool>;
}
