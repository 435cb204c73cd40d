/**
 * Response Envelope
 *
 * Every API response is wrapped in a uniform envelope:
 *
 * ```json
 * { "success": true,  "data": { ... } }
 * { "success": false, "error": { "code": "NOT_FOUND", "message": "..." } }
 * ```
 *
 * Handlers build success envelopes through [`ok`]; error envelopes are
 * produced by the `IntoResponse` implementation on `ApiError`.
 */
use axum::response::Json;
use serde::{Deserialize, Serialize};

/// The uniform `{success, data, error}` response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error details carried in a failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable error code (e.g. `INVALID_TITLE`)
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Wrap a payload in a success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data: Some(data),
        error: None,
    })
}

impl ApiResponse<()> {
    /// Build a failure envelope with the given code and message.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}
