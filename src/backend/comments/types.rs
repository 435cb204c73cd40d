/**
 * Comment Types
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::requirements::types::Author;

/// Comment creation request body
#[derive(Deserialize, Debug)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
}

/// Comment projection with its author attached
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user: Author,
}
