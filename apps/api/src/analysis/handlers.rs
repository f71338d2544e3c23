//! Axum route handlers for the à-la-carte analysis endpoints.
//!
//! These expose the core engine directly — no LLM calls — so callers can
//! compare records they already hold, score two raw texts, or scan a text
//! against the configured lexicon.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::compare::{compare, ComparisonResult};
use crate::analysis::extract::extract_skills;
use crate::analysis::similarity::similarity;
use crate::errors::AppError;
use crate::extraction::records::StructuredRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub job: StructuredRecord,
    pub resume: StructuredRecord,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: ComparisonResult,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub text_a: String,
    pub text_b: String,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct SkillScanRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillScanResponse {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/compare
///
/// Compares two already-structured records without invoking the LLM.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let comparison = compare(&request.job, &request.resume, state.rounding);
    Ok(Json(CompareResponse { comparison }))
}

/// POST /api/v1/analysis/similarity
///
/// TF-IDF cosine similarity between two arbitrary texts. Degenerate input
/// scores 0 rather than erroring, so no validation guard here.
pub async fn handle_similarity(
    Json(request): Json<SimilarityRequest>,
) -> Json<SimilarityResponse> {
    let score = similarity(&request.text_a, &request.text_b);
    Json(SimilarityResponse { score })
}

/// POST /api/v1/analysis/skills
///
/// Scans a text against the configured skill lexicon.
pub async fn handle_skill_scan(
    State(state): State<AppState>,
    Json(request): Json<SkillScanRequest>,
) -> Result<Json<SkillScanResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let technical = extract_skills(&request.text, &state.lexicon.technical);
    let soft = extract_skills(&request.text, &state.lexicon.soft);

    Ok(Json(SkillScanResponse { technical, soft }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_request_deserializes_partial_records() {
        let json = serde_json::json!({
            "job": {"skills": {"technical": ["python"]}},
            "resume": {}
        });
        let request: CompareRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.job.skills.technical, vec!["python"]);
        assert!(request.resume.skills.technical.is_empty());
    }

    #[test]
    fn test_similarity_request_deserializes() {
        let json = serde_json::json!({"text_a": "one", "text_b": "two"});
        let request: SimilarityRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.text_a, "one");
        assert_eq!(request.text_b, "two");
    }

    #[test]
    fn test_skill_scan_response_serializes_both_categories() {
        let response = SkillScanResponse {
            technical: vec!["python".to_string()],
            soft: vec!["communication".to_string()],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("technical").is_some());
        assert!(value.get("soft").is_some());
    }
}
