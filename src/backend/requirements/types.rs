/**
 * Requirement Types and Validation
 *
 * Data model, request payloads, response projections, and the field
 * validation shared by the create and update handlers.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::comments::types::CommentResponse;
use crate::backend::error::ApiError;

/// Requirement lifecycle status
///
/// Stored as text in the database; transitions are unconstrained, the owner
/// may set any value from this set on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl RequirementStatus {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse the database/wire representation
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Requirement row as stored in the database
#[derive(Debug, Clone)]
pub struct Requirement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: RequirementStatus,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Create/update request body
///
/// Fields are optional so that absent values surface as `MISSING_FIELDS`
/// instead of a deserialization rejection. The deadline arrives as an
/// RFC 3339 string and is parsed during validation. `status` is ignored on
/// create and validated on update.
#[derive(Deserialize, Debug)]
pub struct RequirementPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub deadline: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Payload after validation
#[derive(Debug)]
pub struct ValidatedRequirement {
    pub title: String,
    pub description: String,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    /// `None` means "leave tags untouched" on update
    pub tags: Option<Vec<String>>,
}

/// Validate the shared create/update fields.
///
/// # Errors
///
/// * `MISSING_FIELDS` - title or description absent/empty
/// * `INVALID_TITLE` - title outside 5-100 characters
/// * `INVALID_DESCRIPTION` - description outside 20-5000 characters
/// * `INVALID_BUDGET` - budget negative or not finite
/// * `INVALID_DEADLINE` - deadline unparseable or not in the future
pub fn validate_payload(payload: &RequirementPayload) -> Result<ValidatedRequirement, ApiError> {
    let title = payload.title.as_deref().unwrap_or_default();
    let description = payload.description.as_deref().unwrap_or_default();

    if title.is_empty() || description.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let title_len = title.chars().count();
    if !(5..=100).contains(&title_len) {
        return Err(ApiError::InvalidTitle);
    }

    let description_len = description.chars().count();
    if !(20..=5000).contains(&description_len) {
        return Err(ApiError::InvalidDescription);
    }

    if let Some(budget) = payload.budget {
        if !budget.is_finite() || budget < 0.0 {
            return Err(ApiError::InvalidBudget);
        }
    }

    let deadline = match payload.deadline.as_deref() {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|_| ApiError::InvalidDeadline)?
                .with_timezone(&Utc);
            if parsed <= Utc::now() {
                return Err(ApiError::InvalidDeadline);
            }
            Some(parsed)
        }
        None => None,
    };

    let tags = payload.tags.as_ref().map(|tags| {
        tags.iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
    });

    Ok(ValidatedRequirement {
        title: title.to_string(),
        description: description.to_string(),
        budget: payload.budget,
        deadline,
        tags,
    })
}

/// List query parameters
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first (default)
    Latest,
    /// Oldest first
    Oldest,
}

impl SortOrder {
    /// Parse the `sort` query parameter; anything unknown means latest-first.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("oldest") => Self::Oldest,
            _ => Self::Latest,
        }
    }
}

/// Listing filter after parameter normalization
#[derive(Debug)]
pub struct ListFilter {
    /// Raw status filter; an unknown value simply matches nothing
    pub status: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl ListFilter {
    /// Normalize query parameters: page >= 1, limit within 1..=100.
    pub fn from_query(query: &ListQuery) -> Self {
        ListFilter {
            status: query.status.clone().filter(|s| !s.is_empty()),
            tag: query.tag.clone().filter(|t| !t.is_empty()),
            search: query.search.clone().filter(|s| !s.is_empty()),
            sort: SortOrder::from_param(query.sort.as_deref()),
            page: query.page.unwrap_or(1).max(1),
            limit: query.limit.unwrap_or(10).clamp(1, 100),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Author projection embedded in requirement and comment responses
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub username: String,
    pub avatar: Option<String>,
}

/// Comment and like counts attached to a requirement
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub comments: i64,
    pub likes: i64,
}

/// Requirement projection returned by the list and detail endpoints
///
/// Tags are flattened to plain name strings.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: RequirementStatus,
    pub created_at: DateTime<Utc>,
    pub user: Author,
    pub tags: Vec<String>,
    pub counts: Counts,
}

/// Detail projection: the requirement plus its comments, newest first
#[derive(Serialize, Debug)]
pub struct RequirementDetail {
    #[serde(flatten)]
    pub requirement: RequirementResponse,
    pub comments: Vec<CommentResponse>,
}

/// Slim projection for the related-requirements endpoint
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRequirement {
    pub id: Uuid,
    pub title: String,
    pub status: RequirementStatus,
    pub budget: Option<f64>,
}

/// Listing page
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListData {
    pub items: Vec<RequirementResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn payload(title: &str, description: &str) -> RequirementPayload {
        RequirementPayload {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            budget: None,
            deadline: None,
            status: None,
            tags: None,
        }
    }

    const GOOD_DESCRIPTION: &str = "a description easily over twenty characters";

    #[test]
    fn test_title_length_boundaries() {
        let err = validate_payload(&payload("abcd", GOOD_DESCRIPTION)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidTitle));

        assert!(validate_payload(&payload("abcde", GOOD_DESCRIPTION)).is_ok());
        assert!(validate_payload(&payload(&"x".repeat(100), GOOD_DESCRIPTION)).is_ok());

        let err = validate_payload(&payload(&"x".repeat(101), GOOD_DESCRIPTION)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidTitle));
    }

    #[test]
    fn test_description_length_boundaries() {
        let err = validate_payload(&payload("a fine title", &"y".repeat(19))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDescription));

        assert!(validate_payload(&payload("a fine title", &"y".repeat(20))).is_ok());
        assert!(validate_payload(&payload("a fine title", &"y".repeat(5000))).is_ok());

        let err = validate_payload(&payload("a fine title", &"y".repeat(5001))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDescription));
    }

    #[test]
    fn test_missing_fields() {
        let mut body = payload("", GOOD_DESCRIPTION);
        assert!(matches!(
            validate_payload(&body).unwrap_err(),
            ApiError::MissingFields
        ));

        body = payload("a fine title", GOOD_DESCRIPTION);
        body.description = None;
        assert!(matches!(
            validate_payload(&body).unwrap_err(),
            ApiError::MissingFields
        ));
    }

    #[test]
    fn test_budget_validation() {
        let mut body = payload("a fine title", GOOD_DESCRIPTION);
        body.budget = Some(-1.0);
        assert!(matches!(
            validate_payload(&body).unwrap_err(),
            ApiError::InvalidBudget
        ));

        body.budget = Some(0.0);
        assert_eq!(validate_payload(&body).unwrap().budget, Some(0.0));
    }

    #[test]
    fn test_deadline_must_be_future() {
        let mut body = payload("a fine title", GOOD_DESCRIPTION);

        body.deadline = Some((Utc::now() - Duration::days(1)).to_rfc3339());
        assert!(matches!(
            validate_payload(&body).unwrap_err(),
            ApiError::InvalidDeadline
        ));

        body.deadline = Some("not a date".to_string());
        assert!(matches!(
            validate_payload(&body).unwrap_err(),
            ApiError::InvalidDeadline
        ));

        body.deadline = Some((Utc::now() + Duration::days(7)).to_rfc3339());
        assert!(validate_payload(&body).unwrap().deadline.is_some());
    }

    #[test]
    fn test_tags_are_trimmed_and_pruned() {
        let mut body = payload("a fine title", GOOD_DESCRIPTION);
        body.tags = Some(vec![
            " rust ".to_string(),
            "".to_string(),
            "go".to_string(),
        ]);

        let tags = validate_payload(&body).unwrap().tags.unwrap();
        assert_eq!(tags, vec!["rust".to_string(), "go".to_string()]);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequirementStatus::Open,
            RequirementStatus::InProgress,
            RequirementStatus::Completed,
            RequirementStatus::Cancelled,
        ] {
            assert_eq!(RequirementStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(RequirementStatus::from_str("archived"), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&RequirementStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(SortOrder::from_param(None), SortOrder::Latest);
        assert_eq!(SortOrder::from_param(Some("latest")), SortOrder::Latest);
        assert_eq!(SortOrder::from_param(Some("oldest")), SortOrder::Oldest);
        assert_eq!(SortOrder::from_param(Some("bogus")), SortOrder::Latest);
    }

    #[test]
    fn test_list_filter_normalization() {
        let filter = ListFilter::from_query(&ListQuery {
            page: Some(0),
            limit: Some(1000),
            status: Some("".to_string()),
            ..Default::default()
        });
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 100);
        assert_eq!(filter.status, None);
        assert_eq!(filter.offset(), 0);

        let filter = ListFilter::from_query(&ListQuery {
            page: Some(3),
            limit: Some(20),
            ..Default::default()
        });
        assert_eq!(filter.offset(), 40);
    }
}
