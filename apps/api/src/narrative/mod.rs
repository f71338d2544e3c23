//! Narrative generation — the two prose calls that turn a structured
//! comparison into human-readable analysis and suggestions.
//!
//! Both consume JSON context embedded in the prompt and return free-form
//! text with no schema, so they go through `call_text`, not `call_json`.

pub mod prompts;

use crate::analysis::compare::ComparisonResult;
use crate::errors::AppError;
use crate::extraction::records::StructuredRecord;
use crate::llm_client::LlmClient;
use crate::narrative::prompts::{
    FIT_ANALYSIS_PROMPT_TEMPLATE, FIT_ANALYSIS_SYSTEM, IMPROVEMENTS_PROMPT_TEMPLATE,
    IMPROVEMENTS_SYSTEM,
};

/// Generates the fit-analysis prose for a completed comparison.
pub async fn fit_analysis(
    llm: &LlmClient,
    job: &StructuredRecord,
    resume: &StructuredRecord,
    comparison: &ComparisonResult,
) -> Result<String, AppError> {
    let analysis_data = serde_json::json!({
        "job": job,
        "resume": resume,
        "similarity_scores": {
            "overall": comparison.overall_similarity,
            "technical_skills": comparison.technical_match_pct,
            "soft_skills": comparison.soft_match_pct,
        },
        "missing_skills": {
            "technical": comparison.missing_technical,
            "soft": comparison.missing_soft,
        },
    });

    let context = serde_json::to_string_pretty(&analysis_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize analysis data: {e}")))?;

    let prompt = FIT_ANALYSIS_PROMPT_TEMPLATE.replace("{analysis_json}", &context);

    llm.call_text(&prompt, FIT_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Fit analysis failed: {e}")))
}

/// Generates actionable resume-improvement suggestions.
pub async fn improvement_suggestions(
    llm: &LlmClient,
    job: &StructuredRecord,
    resume: &StructuredRecord,
    comparison: &ComparisonResult,
) -> Result<String, AppError> {
    let job_json = to_json(job)?;
    let resume_json = to_json(resume)?;
    let comparison_json = to_json(comparison)?;

    let prompt = IMPROVEMENTS_PROMPT_TEMPLATE
        .replace("{job_json}", &job_json)
        .replace("{resume_json}", &resume_json)
        .replace("{comparison_json}", &comparison_json);

    llm.call_text(&prompt, IMPROVEMENTS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Improvement suggestions failed: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt context: {e}")))
}
