use crate::Result as DbErrorResult;
use crate::repositories::UserStore;

use notes_core::User;

use async_trait::async_trait;
use chrono::DateTime;
use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: i64,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            email: r.email,
            password_hash: r.password_hash,
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, email, password_hash, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, email, password_hash, created_at
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: &User) -> DbErrorResult<i64> {
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (username, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
