//! Database operations for likes
//!
//! A like is nothing but the presence of a `(user_id, requirement_id)` row;
//! there is no stored flag. Toggling inserts or deletes the row.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Whether the user has liked the requirement.
pub async fn like_exists(
    pool: &PgPool,
    user_id: Uuid,
    requirement_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT 1 FROM likes
        WHERE user_id = $1 AND requirement_id = $2
        "#,
    )
    .bind(user_id)
    .bind(requirement_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}

/// Record a like.
pub async fn insert_like(
    pool: &PgPool,
    user_id: Uuid,
    requirement_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO likes (user_id, requirement_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(requirement_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a like.
pub async fn delete_like(
    pool: &PgPool,
    user_id: Uuid,
    requirement_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM likes
        WHERE user_id = $1 AND requirement_id = $2
        "#,
    )
    .bind(user_id)
    .bind(requirement_id)
    .execute(pool)
    .await?;

    Ok(())
}
