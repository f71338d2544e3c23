//! Comparison orchestration — composes the similarity scorer and gap
//! analyzer over two structured records into a single immutable result.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::gap::{match_pct, missing_skills};
use crate::analysis::similarity::{round_to, similarity_rounded};
use crate::extraction::records::StructuredRecord;

/// Decimal places applied per metric.
///
/// Kept independently configurable: the overall similarity reads naturally at
/// two places while skill-match percentages are displayed at one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rounding {
    pub overall_decimals: u32,
    pub match_decimals: u32,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            overall_decimals: 2,
            match_decimals: 1,
        }
    }
}

/// The outcome of one analysis run. Immutable after creation; consumed by
/// narrative generation and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// TF-IDF cosine similarity of the two full records, 0–100.
    pub overall_similarity: f64,
    pub technical_match_pct: f64,
    pub soft_match_pct: f64,
    pub missing_technical: BTreeSet<String>,
    pub missing_soft: BTreeSet<String>,
}

/// Compares a job record against a resume record.
///
/// Pure function of its inputs: no state is retained between invocations.
/// Skill names are lowercased on both sides before the set difference, so
/// results never depend on upstream casing. Partial records (missing skills
/// fields) compare as empty rather than failing.
pub fn compare(
    job: &StructuredRecord,
    resume: &StructuredRecord,
    rounding: Rounding,
) -> ComparisonResult {
    let required_technical = lowercased(&job.skills.technical);
    let required_soft = lowercased(&job.skills.soft);
    let possessed_technical = lowercased(&resume.skills.technical);
    let possessed_soft = lowercased(&resume.skills.soft);

    let missing_technical = missing_skills(&required_technical, &possessed_technical);
    let missing_soft = missing_skills(&required_soft, &possessed_soft);

    let technical_match_pct = round_to(
        match_pct(unique_count(&required_technical), missing_technical.len()),
        rounding.match_decimals,
    );
    let soft_match_pct = round_to(
        match_pct(unique_count(&required_soft), missing_soft.len()),
        rounding.match_decimals,
    );

    let overall_similarity = similarity_rounded(
        &job.canonical_form(),
        &resume.canonical_form(),
        rounding.overall_decimals,
    );

    ComparisonResult {
        overall_similarity,
        technical_match_pct,
        soft_match_pct,
        missing_technical,
        missing_soft,
    }
}

fn lowercased(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn unique_count(skills: &[String]) -> usize {
    skills.iter().collect::<BTreeSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(technical: &[&str], soft: &[&str]) -> StructuredRecord {
        serde_json::from_value(serde_json::json!({
            "industry": "software",
            "skills": {
                "technical": technical,
                "soft": soft,
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_scenario_partial_match() {
        // Job requires python, sql (technical) + communication (soft);
        // resume has python (technical) + leadership (soft).
        let job = record(&["python", "sql"], &["communication"]);
        let resume = record(&["python"], &["leadership"]);

        let result = compare(&job, &resume, Rounding::default());

        assert_eq!(
            result.missing_technical,
            BTreeSet::from(["sql".to_string()])
        );
        assert_eq!(result.technical_match_pct, 50.0);
        assert_eq!(
            result.missing_soft,
            BTreeSet::from(["communication".to_string()])
        );
        assert_eq!(result.soft_match_pct, 0.0);
    }

    #[test]
    fn test_scenario_identical_skill_sets() {
        let job = record(&["python", "sql"], &["teamwork"]);
        let resume = record(&["python", "sql"], &["teamwork"]);

        let result = compare(&job, &resume, Rounding::default());

        assert!(result.missing_technical.is_empty());
        assert_eq!(result.technical_match_pct, 100.0);
        assert!(result.missing_soft.is_empty());
        assert_eq!(result.soft_match_pct, 100.0);
    }

    #[test]
    fn test_empty_required_skills_score_zero_not_error() {
        let job = record(&[], &[]);
        let resume = record(&["python"], &["communication"]);

        let result = compare(&job, &resume, Rounding::default());

        assert_eq!(result.technical_match_pct, 0.0);
        assert_eq!(result.soft_match_pct, 0.0);
        assert!(result.missing_technical.is_empty());
        assert!(result.missing_soft.is_empty());
    }

    #[test]
    fn test_partial_records_default_to_empty() {
        let job: StructuredRecord =
            serde_json::from_str(r#"{"title": "Engineer"}"#).unwrap();
        let resume: StructuredRecord = serde_json::from_str(r#"{}"#).unwrap();

        let result = compare(&job, &resume, Rounding::default());

        assert_eq!(result.technical_match_pct, 0.0);
        assert!(result.missing_technical.is_empty());
    }

    #[test]
    fn test_skill_casing_is_normalized_before_difference() {
        let job = record(&["Python", "SQL"], &[]);
        let resume = record(&["python", "sql"], &[]);

        let result = compare(&job, &resume, Rounding::default());

        assert!(result.missing_technical.is_empty());
        assert_eq!(result.technical_match_pct, 100.0);
    }

    #[test]
    fn test_duplicate_required_skills_do_not_skew_percentage() {
        let job = record(&["python", "python", "sql"], &[]);
        let resume = record(&["python"], &[]);

        let result = compare(&job, &resume, Rounding::default());

        // Two unique required skills, one missing
        assert_eq!(result.technical_match_pct, 50.0);
    }

    #[test]
    fn test_overall_similarity_maximum_for_identical_records() {
        let job = record(&["python"], &["communication"]);
        let result = compare(&job, &job.clone(), Rounding::default());
        assert_eq!(result.overall_similarity, 100.0);
    }

    #[test]
    fn test_overall_similarity_bounded() {
        let job = record(&["python", "kubernetes"], &["leadership"]);
        let resume = record(&["excel"], &["negotiation"]);
        let result = compare(&job, &resume, Rounding::default());
        assert!((0.0..=100.0).contains(&result.overall_similarity));
    }

    #[test]
    fn test_rounding_policy_is_applied_per_metric() {
        let job = record(&["a1", "b2", "c3"], &[]);
        let resume = record(&["a1"], &[]);

        let result = compare(
            &job,
            &resume,
            Rounding {
                overall_decimals: 2,
                match_decimals: 1,
            },
        );
        // 1/3 matched -> 33.333...% rounds to one decimal place
        assert_eq!(result.technical_match_pct, 33.3);

        let coarse = compare(
            &job,
            &resume,
            Rounding {
                overall_decimals: 0,
                match_decimals: 0,
            },
        );
        assert_eq!(coarse.technical_match_pct, 33.0);
    }

    #[test]
    fn test_compare_is_deterministic() {
        let job = record(&["python", "sql"], &["communication"]);
        let resume = record(&["python"], &["teamwork"]);

        let first = compare(&job, &resume, Rounding::default());
        let second = compare(&job, &resume, Rounding::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_with_expected_fields() {
        let result = compare(
            &record(&["python"], &[]),
            &record(&[], &[]),
            Rounding::default(),
        );
        let value = serde_json::to_value(&result).unwrap();
        for field in [
            "overall_similarity",
            "technical_match_pct",
            "soft_match_pct",
            "missing_technical",
            "missing_soft",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
