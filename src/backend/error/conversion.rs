/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses carrying the
 * uniform failure envelope. Handlers return `Result<_, ApiError>` and the
 * conversion happens automatically at the handler boundary.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "error": { "code": "INVALID_TITLE", "message": "..." }
 * }
 * ```
 *
 * Internal errors are logged here with their full cause before being
 * collapsed to a generic 500 body.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::envelope::ApiResponse;
use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {self}");
        }

        let body = ApiResponse::failure(self.code(), self.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ApiError::InvalidTitle.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_TITLE");
    }

    #[tokio::test]
    async fn test_internal_error_is_masked_on_the_wire() {
        let response = ApiError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(!message.contains("pool"), "cause must not leak: {message}");
    }
}
