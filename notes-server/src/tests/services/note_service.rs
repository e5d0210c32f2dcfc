use crate::api::notes::create_note_request::CreateNoteRequest;
use crate::api::notes::list_notes_query::ListNotesQuery;
use crate::api::notes::update_note_request::UpdateNoteRequest;
use crate::services::NoteService;
use crate::tests::services::doubles::InMemoryNotes;

use notes_core::Note;

fn stored_note(id: i64, owner_id: i64, title: &str, content: &str) -> Note {
    let mut note = Note::new(owner_id, title.to_string(), content.to_string());
    note.id = id;
    note
}

fn create_request(title: &str, content: &str) -> CreateNoteRequest {
    CreateNoteRequest {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn given_create_request_when_created_then_dto_carries_store_id() {
    let service = NoteService::new(InMemoryNotes::new());

    let note = service
        .create(1, create_request("Groceries", "milk, eggs"))
        .await
        .unwrap();

    assert_eq!(note.id, 1);
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "milk, eggs");
    assert_eq!(note.created_at, note.updated_at);
}

#[tokio::test]
async fn given_notes_from_two_owners_when_listing_then_only_callers_returned() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![
        stored_note(1, 1, "Mine", ""),
        stored_note(2, 2, "Theirs", ""),
    ]));

    let notes = service.list(1, ListNotesQuery::default()).await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Mine");
}

#[tokio::test]
async fn given_blank_search_when_listing_then_treated_as_no_search() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![
        stored_note(1, 1, "Alpha", ""),
        stored_note(2, 1, "Beta", ""),
    ]));

    let notes = service
        .list(
            1,
            ListNotesQuery {
                search: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(notes.len(), 2);
}

#[tokio::test]
async fn given_search_term_when_listing_then_filtered() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![
        stored_note(1, 1, "Groceries", "milk"),
        stored_note(2, 1, "Chores", "laundry"),
    ]));

    let notes = service
        .list(
            1,
            ListNotesQuery {
                search: Some("milk".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, 1);
}

#[tokio::test]
async fn given_other_owners_note_when_getting_then_absent() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![stored_note(
        1, 2, "Theirs", "",
    )]));

    let note = service.get(1, 1).await.unwrap();

    assert!(note.is_none());
}

#[tokio::test]
async fn given_update_request_when_applied_then_both_fields_replaced() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![stored_note(
        1, 1, "Old", "old body",
    )]));

    let note = service
        .update(
            1,
            1,
            UpdateNoteRequest {
                title: "New".to_string(),
                content: "new body".to_string(),
            },
        )
        .await
        .unwrap()
        .expect("update should find the note");

    assert_eq!(note.title, "New");
    assert_eq!(note.content, "new body");
    assert!(note.updated_at >= note.created_at);
}

#[tokio::test]
async fn given_other_owners_note_when_updating_then_absent() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![stored_note(
        1, 2, "Theirs", "",
    )]));

    let note = service
        .update(
            1,
            1,
            UpdateNoteRequest {
                title: "Hijack".to_string(),
                content: String::new(),
            },
        )
        .await
        .unwrap();

    assert!(note.is_none());
}

#[tokio::test]
async fn given_existing_note_when_deleted_then_second_delete_reports_absent() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![stored_note(
        1, 1, "Gone", "",
    )]));

    assert!(service.delete(1, 1).await.unwrap());
    assert!(!service.delete(1, 1).await.unwrap());
}

#[tokio::test]
async fn given_other_owners_note_when_deleting_then_reports_absent() {
    let service = NoteService::new(InMemoryNotes::with_notes(vec![stored_note(
        1, 2, "Theirs", "",
    )]));

    assert!(!service.delete(1, 1).await.unwrap());
}
