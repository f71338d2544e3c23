//! Job and resume parsing — the two structured-extraction LLM calls.

use crate::errors::AppError;
use crate::extraction::prompts::{
    JOB_PARSE_PROMPT_TEMPLATE, JOB_PARSE_SYSTEM, RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM,
};
use crate::extraction::records::StructuredRecord;
use crate::llm_client::{LlmClient, LlmError};

/// Parses a raw job description into a `StructuredRecord`.
pub async fn parse_job(job_text: &str, llm: &LlmClient) -> Result<StructuredRecord, AppError> {
    let prompt = JOB_PARSE_PROMPT_TEMPLATE.replace("{job_text}", job_text);
    llm.call_json::<StructuredRecord>(&prompt, JOB_PARSE_SYSTEM)
        .await
        .map_err(|e| extraction_error("job description", e))
}

/// Parses extracted resume text into a `StructuredRecord`.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<StructuredRecord, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    llm.call_json::<StructuredRecord>(&prompt, RESUME_PARSE_SYSTEM)
        .await
        .map_err(|e| extraction_error("resume", e))
}

/// A response that is not valid JSON after fence-stripping is a malformed
/// extraction (recoverable, surfaced to the UI); transport and API failures
/// stay LLM errors.
fn extraction_error(source: &str, err: LlmError) -> AppError {
    match err {
        LlmError::Parse(e) => {
            AppError::MalformedExtraction(format!("{source} extraction returned invalid JSON: {e}"))
        }
        other => AppError::Llm(format!("{source} parsing failed: {other}")),
    }
}
