//! Analysis pipeline — orchestrates one full job-fit run.
//!
//! Flow: read resume document → parse job → parse resume → compare →
//!       fit-analysis prose → improvement prose → response.
//!
//! One run per request, sequential, no state retained between runs. Any
//! failing step abandons the run via `?` — a partial result never escapes.

pub mod handlers;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::compare::{compare, ComparisonResult};
use crate::documents::{read_document, DocumentKind};
use crate::errors::AppError;
use crate::extraction::parser::{parse_job, parse_resume};
use crate::extraction::records::StructuredRecord;
use crate::narrative;
use crate::state::AppState;

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub job: StructuredRecord,
    pub resume: StructuredRecord,
    pub comparison: ComparisonResult,
    pub fit_analysis: String,
    pub improvements: String,
}

/// Runs the full analysis pipeline for one job description / resume pair.
pub async fn run_analysis(
    state: &AppState,
    job_text: &str,
    resume_bytes: &[u8],
    resume_mime: &str,
) -> Result<AnalysisResponse, AppError> {
    let analysis_id = Uuid::new_v4();
    info!("Starting analysis {analysis_id}");

    // Step 1: Extract resume text
    let kind = DocumentKind::from_mime(resume_mime)
        .ok_or_else(|| AppError::UnsupportedFormat(resume_mime.to_string()))?;
    let resume_text = read_document(kind, resume_bytes, state.docx.as_ref()).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::DocumentRead(
            "the uploaded document contains no extractable text".to_string(),
        ));
    }

    // Step 2: Parse job description
    let job = parse_job(job_text, &state.llm).await?;

    // Step 3: Parse resume
    let resume = parse_resume(&resume_text, &state.llm).await?;

    // Step 4: Compare
    let comparison = compare(&job, &resume, state.rounding);
    info!(
        "Analysis {analysis_id}: overall={} technical={} soft={}",
        comparison.overall_similarity, comparison.technical_match_pct, comparison.soft_match_pct
    );

    // Step 5: Fit-analysis prose
    let fit_analysis = narrative::fit_analysis(&state.llm, &job, &resume, &comparison).await?;

    // Step 6: Improvement suggestions
    let improvements =
        narrative::improvement_suggestions(&state.llm, &job, &resume, &comparison).await?;

    info!("Analysis {analysis_id} complete");

    Ok(AnalysisResponse {
        analysis_id,
        job,
        resume,
        comparison,
        fit_analysis,
        improvements,
    })
}
