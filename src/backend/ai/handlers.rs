/**
 * AI Analysis Handler
 *
 * POST /api/requirements/analyze relays a feasibility analysis from the
 * configured completion API. The result is returned directly and never
 * persisted.
 */
use axum::{extract::State, response::Json};
use serde::Deserialize;

use crate::backend::ai::client::{AiAnalysis, AnalysisError};
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Analyze request body
#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Analyze handler
///
/// # Errors
///
/// * `400 MISSING_FIELDS` - Title or description absent
/// * `500 INTERNAL_ERROR` - Service unconfigured, upstream failure, or
///   unparseable completion content
pub async fn analyze_requirement(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AiAnalysis>>, ApiError> {
    let title = request.title.as_deref().unwrap_or_default();
    let description = request.description.as_deref().unwrap_or_default();

    if title.is_empty() || description.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let client = state
        .analysis
        .as_ref()
        .ok_or(AnalysisError::NotConfigured)?;

    let analysis = client.analyze(title, description).await?;

    Ok(ok(analysis))
}
