use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Nothing here is fatal to the process: every variant maps to a response that
/// ends the current analysis run and leaves the service ready for a retry.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document read error: {0}")]
    DocumentRead(String),

    #[error("Malformed extraction response: {0}")]
    MalformedExtraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported document format: {msg}. Upload a PDF, DOCX, or TXT file."),
            ),
            AppError::DocumentRead(msg) => {
                tracing::warn!("Document read failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DOCUMENT_READ_ERROR",
                    format!("Could not extract text from the uploaded document: {msg}"),
                )
            }
            AppError::MalformedExtraction(msg) => {
                tracing::error!("Malformed extraction response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_EXTRACTION",
                    "The analysis service returned an unreadable response. Please retry."
                        .to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
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
