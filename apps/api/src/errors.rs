use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::analyzer::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidBody(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                (rejection.status(), "INVALID_REQUEST_BODY", rejection.body_text())
            }
            AppError::Analysis(e) => {
                tracing::error!("Analysis failed: {e}");
                let (status, code) = match e {
                    AnalysisError::ServiceUnavailable(_) => {
                        (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
                    }
                    AnalysisError::MalformedResponse(_) => {
                        (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE")
                    }
                    AnalysisError::SchemaMismatch(_) => (StatusCode::BAD_GATEWAY, "SCHEMA_MISMATCH"),
                };
                (status, code, format!("Analysis failed: {e}"))
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
