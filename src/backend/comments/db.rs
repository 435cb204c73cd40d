//! Database operations for comments

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::backend::comments::types::CommentResponse;
use crate::backend::requirements::types::Author;

/// List a requirement's comments, newest first, with authors attached.
pub async fn list_comments(
    pool: &PgPool,
    requirement_id: Uuid,
) -> Result<Vec<CommentResponse>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.content, c.created_at,
               u.id AS author_id, u.username AS author_username, u.avatar AS author_avatar
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.requirement_id = $1
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(requirement_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(CommentResponse {
                id: row.try_get("id")?,
                content: row.try_get("content")?,
                created_at: row.try_get("created_at")?,
                user: Author {
                    id: row.try_get("author_id")?,
                    username: row.try_get("author_username")?,
                    avatar: row.try_get("author_avatar")?,
                },
            })
        })
        .collect()
}

/// Create a comment on a requirement.
///
/// The caller has already checked that the requirement exists.
pub async fn create_comment(
    pool: &PgPool,
    user_id: Uuid,
    requirement_id: Uuid,
    content: &str,
) -> Result<CommentResponse, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO comments (id, content, user_id, requirement_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(content)
    .bind(user_id)
    .bind(requirement_id)
    .bind(now)
    .execute(pool)
    .await?;

    let row = sqlx::query(
        r#"
        SELECT c.id, c.content, c.created_at,
               u.id AS author_id, u.username AS author_username, u.avatar AS author_avatar
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.id = $1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(CommentResponse {
        id: row.try_get("id")?,
        content: row.try_get("content")?,
        created_at: row.try_get("created_at")?,
        user: Author {
            id: row.try_get("author_id")?,
            username: row.try_get("author_username")?,
            avatar: row.try_get("author_avatar")?,
        },
    })
}
