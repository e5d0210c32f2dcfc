use crate::Result as DbErrorResult;
use crate::repositories::{NoteListFilter, NoteStore};

use notes_core::Note;

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::SqlitePool;

/// Single conditional-sort query: exactly one branch of the ORDER BY chain
/// is non-null for any given sort_by/sort_order pair, and an absent or
/// unrecognized sort_by lands on the created_at DESC fallback.
const LIST_SQL: &str = r#"
  SELECT id, user_id, title, content, created_at, updated_at
  FROM notes
  WHERE user_id = ?1
  AND (?2 IS NULL OR title LIKE ?3 OR content LIKE ?3)
  ORDER BY
  CASE WHEN ?4 = 'title' AND ?5 = 'asc' THEN title END ASC,
  CASE WHEN ?4 = 'title' AND ?5 = 'desc' THEN title END DESC,
  CASE WHEN ?4 = 'createdAt' AND ?5 = 'asc' THEN created_at END ASC,
  CASE WHEN ?4 = 'createdAt' AND ?5 = 'desc' THEN created_at END DESC,
  CASE WHEN ?4 IS NULL OR ?4 NOT IN ('title', 'createdAt') THEN created_at END DESC
  "#;

pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i64,
    user_id: i64,
    title: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Note {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            content: r.content,
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::from_timestamp(r.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: &NoteListFilter,
    ) -> DbErrorResult<Vec<Note>> {
        let pattern = filter.search.as_deref().map(|s| format!("%{}%", s));
        // Anything that is not an explicit "asc" sorts descending
        let sort_order = match filter.sort_order.as_deref() {
            Some("asc") => "asc",
            _ => "desc",
        };

        let rows = sqlx::query_as::<_, NoteRow>(LIST_SQL)
            .bind(owner_id)
            .bind(filter.search.as_deref())
            .bind(pattern)
            .bind(filter.sort_by.as_deref())
            .bind(sort_order)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: i64, owner_id: i64) -> DbErrorResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
              SELECT id, user_id, title, content, created_at, updated_at
              FROM notes
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn create(&self, note: &Note) -> DbErrorResult<i64> {
        let created_at = note.created_at.timestamp();
        let updated_at = note.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO notes (user_id, title, content, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(note.user_id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, note: &Note) -> DbErrorResult<bool> {
        let updated_at = note.updated_at.timestamp();

        let result = sqlx::query(
            r#"
              UPDATE notes
              SET title = ?, content = ?, updated_at = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(updated_at)
        .bind(note.id)
        .bind(note.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64, owner_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
