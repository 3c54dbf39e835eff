//! API error responses.
//!
//! The contract has a single failure mode: an unknown or missing identifier
//! on one of the two lookup endpoints, rendered as `{"error": <message>}`
//! with HTTP 404. Everything else succeeds unconditionally.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Status poll for an id that was never issued (or no id at all).
    #[error("Hypothesis ID not found")]
    HypothesisNotFound,

    /// Project lookup for an id that is not one of the fixed records.
    #[error("Project not found")]
    ProjectNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_renders_404_with_error_field() {
        let response = ApiError::HypothesisNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::HypothesisNotFound.to_string(), "Hypothesis ID not found");
        assert_eq!(ApiError::ProjectNotFound.to_string(), "Project not found");
    }
}
