//! Axum route handler for the full analysis pipeline.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::pipeline::{run_analysis, AnalysisResponse};
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Multipart form: a `job_description` text field and a `resume` file part
/// (PDF, DOCX, or TXT — the part's declared content type decides the reader).
/// Runs the full pipeline and returns the assembled analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut job_text: Option<String> = None;
    let mut resume: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        // Owned copy: reading the field body consumes it, so the borrowed
        // name cannot live across the match arms.
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable job_description: {e}")))?;
                job_text = Some(text);
            }
            Some("resume") => {
                let mime = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable resume upload: {e}")))?;
                resume = Some((bytes.to_vec(), mime));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let job_text = job_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;

    let (resume_bytes, resume_mime) = resume
        .filter(|(bytes, _)| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    let response = run_analysis(&state, &job_text, &resume_bytes, &resume_mime).await?;

    Ok(Json(response))
}
