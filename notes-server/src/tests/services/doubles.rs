//! In-memory store doubles for exercising the service layer without SQLite.

use notes_core::{Note, User};
use notes_db::{NoteListFilter, NoteStore, Result as DbResult, UserStore};

use std::sync::Mutex;

use async_trait::async_trait;

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self {
            users: Mutex::new(vec![user]),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: &User) -> DbResult<i64> {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i64 + 1;

        let mut stored = user.clone();
        stored.id = id;
        users.push(stored);

        Ok(id)
    }
}

#[derive(Default)]
pub struct InMemoryNotes {
    notes: Mutex<Vec<Note>>,
}

impl InMemoryNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
        }
    }
}

#[async_trait]
impl NoteStore for InMemoryNotes {
    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: &NoteListFilter,
    ) -> DbResult<Vec<Note>> {
        let notes = self.notes.lock().unwrap();

        let mut matching: Vec<Note> = notes
            .iter()
            .filter(|n| n.user_id == owner_id)
            .filter(|n| match &filter.search {
                Some(term) => n.title.contains(term) || n.content.contains(term),
                None => true,
            })
            .cloned()
            .collect();

        // Only the fallback ordering; SQL-level sorting is covered by the
        // repository tests
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching)
    }

    async fn find_by_id(&self, id: i64, owner_id: i64) -> DbResult<Option<Note>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes
            .iter()
            .find(|n| n.id == id && n.user_id == owner_id)
            .cloned())
    }

    async fn create(&self, note: &Note) -> DbResult<i64> {
        let mut notes = self.notes.lock().unwrap();
        let id = notes.len() as i64 + 1;

        let mut stored = note.clone();
        stored.id = id;
        notes.push(stored);

        Ok(id)
    }

    async fn update(&self, note: &Note) -> DbResult<bool> {
        let mut notes = self.notes.lock().unwrap();

        match notes
            .iter_mut()
            .find(|n| n.id == note.id && n.user_id == note.user_id)
        {
            Some(existing) => {
                *existing = note.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64, owner_id: i64) -> DbResult<bool> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| !(n.id == id && n.user_id == owner_id));

        Ok(notes.len() < before)
    }
}
