//! Database operations for requirements
//!
//! This module contains the queries behind requirement CRUD, listing with
//! filters, tag association, and the related-requirements lookup.
//!
//! Tag association uses connect-or-create semantics: the tag name is the
//! natural key, so two requirements referencing the same name share one tag
//! row. The upsert is `ON CONFLICT (name) DO UPDATE` rather than
//! `DO NOTHING` so that `RETURNING id` always yields the row.

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::backend::requirements::types::{
    Author, Counts, ListFilter, RelatedRequirement, Requirement, RequirementResponse,
    RequirementStatus, SortOrder, ValidatedRequirement,
};

/// Shared SELECT for the list/detail projection: requirement columns, author
/// columns, flattened tag names, and comment/like counts.
const SUMMARY_SELECT: &str = r#"
SELECT r.id, r.title, r.description, r.budget, r.deadline, r.status, r.created_at,
       u.id AS author_id, u.username AS author_username, u.avatar AS author_avatar,
       ARRAY(SELECT t.name FROM requirement_tags rt JOIN tags t ON t.id = rt.tag_id
             WHERE rt.requirement_id = r.id ORDER BY t.name) AS tags,
       (SELECT COUNT(*) FROM comments c WHERE c.requirement_id = r.id) AS comment_count,
       (SELECT COUNT(*) FROM likes l WHERE l.requirement_id = r.id) AS like_count
FROM requirements r
JOIN users u ON u.id = r.user_id
WHERE 1=1
"#;

fn row_to_requirement(row: &PgRow) -> Result<Requirement, sqlx::Error> {
    let status: String = row.try_get("status")?;
    Ok(Requirement {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        budget: row.try_get("budget")?,
        deadline: row.try_get("deadline")?,
        status: RequirementStatus::from_str(&status).unwrap_or(RequirementStatus::Open),
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_summary(row: &PgRow) -> Result<RequirementResponse, sqlx::Error> {
    let status: String = row.try_get("status")?;
    Ok(RequirementResponse {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        budget: row.try_get("budget")?,
        deadline: row.try_get("deadline")?,
        status: RequirementStatus::from_str(&status).unwrap_or(RequirementStatus::Open),
        created_at: row.try_get("created_at")?,
        user: Author {
            id: row.try_get("author_id")?,
            username: row.try_get("author_username")?,
            avatar: row.try_get("author_avatar")?,
        },
        tags: row.try_get("tags")?,
        counts: Counts {
            comments: row.try_get("comment_count")?,
            likes: row.try_get("like_count")?,
        },
    })
}

/// Append the WHERE conditions for a listing filter.
///
/// All conditions are conjunctive. The status filter compares the raw
/// string, so an unknown status value matches nothing rather than erroring.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ListFilter) {
    if let Some(status) = &filter.status {
        builder.push(" AND r.status = ").push_bind(status.clone());
    }
    if let Some(tag) = &filter.tag {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM requirement_tags rt \
                 JOIN tags t ON t.id = rt.tag_id \
                 WHERE rt.requirement_id = r.id AND t.name = ",
            )
            .push_bind(tag.clone())
            .push(")");
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        builder
            .push(" AND (r.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR r.description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Insert a new requirement row with status `open`.
///
/// # Returns
/// The id of the created requirement
pub async fn insert_requirement(
    pool: &PgPool,
    user_id: Uuid,
    data: &ValidatedRequirement,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO requirements (id, title, description, budget, deadline, status, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, 'open', $6, $7)
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.budget)
    .bind(data.deadline)
    .bind(user_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Get a requirement row by id (no joins)
///
/// Used for existence and ownership checks.
pub async fn get_requirement(pool: &PgPool, id: Uuid) -> Result<Option<Requirement>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, title, description, budget, deadline, status, user_id, created_at
        FROM requirements
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(row_to_requirement(&row)?)),
        None => Ok(None),
    }
}

/// Fetch the full projection (author, tags, counts) for one requirement.
pub async fn fetch_summary(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<RequirementResponse>, sqlx::Error> {
    let mut builder = QueryBuilder::new(SUMMARY_SELECT);
    builder.push(" AND r.id = ").push_bind(id);

    let row = builder.build().fetch_optional(pool).await?;
    match row {
        Some(row) => Ok(Some(row_to_summary(&row)?)),
        None => Ok(None),
    }
}

/// List requirements matching a filter, plus the unpaged total.
pub async fn list_requirements(
    pool: &PgPool,
    filter: &ListFilter,
) -> Result<(Vec<RequirementResponse>, i64), sqlx::Error> {
    let mut count_builder =
        QueryBuilder::new("SELECT COUNT(*) FROM requirements r WHERE 1=1");
    push_filters(&mut count_builder, filter);
    let total: i64 = count_builder
        .build_query_scalar()
        .fetch_one(pool)
        .await?;

    let mut builder = QueryBuilder::new(SUMMARY_SELECT);
    push_filters(&mut builder, filter);
    builder.push(match filter.sort {
        SortOrder::Latest => " ORDER BY r.created_at DESC",
        SortOrder::Oldest => " ORDER BY r.created_at ASC",
    });
    builder
        .push(" LIMIT ")
        .push_bind(filter.limit)
        .push(" OFFSET ")
        .push_bind(filter.offset());

    let rows = builder.build().fetch_all(pool).await?;
    let items = rows
        .iter()
        .map(row_to_summary)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((items, total))
}

/// Update the scalar fields of a requirement.
pub async fn update_requirement_row(
    pool: &PgPool,
    id: Uuid,
    data: &ValidatedRequirement,
    status: RequirementStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE requirements
        SET title = $1, description = $2, budget = $3, deadline = $4, status = $5
        WHERE id = $6
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.budget)
    .bind(data.deadline)
    .bind(status.as_str())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a requirement.
///
/// Comments, likes, and tag associations go with it via foreign key
/// cascade; shared tag rows survive.
pub async fn delete_requirement(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM requirements WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Associate tags with a requirement, creating missing tag rows by name.
pub async fn attach_tags(
    pool: &PgPool,
    requirement_id: Uuid,
    names: &[String],
) -> Result<(), sqlx::Error> {
    for name in names {
        let tag_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO tags (id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO requirement_tags (requirement_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(requirement_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// Replace a requirement's tag set: disconnect everything, then
/// connect-or-create the new names.
pub async fn replace_tags(
    pool: &PgPool,
    requirement_id: Uuid,
    names: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM requirement_tags WHERE requirement_id = $1")
        .bind(requirement_id)
        .execute(pool)
        .await?;

    attach_tags(pool, requirement_id, names).await
}

/// Find up to 5 other requirements sharing at least one tag with the given
/// one, newest first. The source requirement is always excluded.
pub async fn related_requirements(
    pool: &PgPool,
    id: Uuid,
) -> Result<Vec<RelatedRequirement>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT r.id, r.title, r.status, r.budget, r.created_at
        FROM requirements r
        JOIN requirement_tags rt ON rt.requirement_id = r.id
        WHERE r.id <> $1
          AND rt.tag_id IN (SELECT tag_id FROM requirement_tags WHERE requirement_id = $1)
        ORDER BY r.created_at DESC
        LIMIT 5
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let status: String = row.try_get("status")?;
            Ok(RelatedRequirement {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                status: RequirementStatus::from_str(&status).unwrap_or(RequirementStatus::Open),
                budget: row.try_get("budget")?,
            })
        })
        .collect()
}
