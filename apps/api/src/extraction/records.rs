//! Structured record models — the JSON-shaped extraction of a job
//! description or resume produced by the narrative generator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Skill lists split into technical and soft categories.
///
/// Both fields default to empty: a record missing `skills.technical` (or the
/// whole `skills` object) compares as having no skills rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillProfile {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

/// A parsed job description or resume.
///
/// The comparison engine only reads `skills`; everything else the extractor
/// returns (industry, experience, education, title/titles, responsibilities/
/// achievements) passes through as opaque JSON. The flattened map serializes
/// with sorted keys, which makes [`StructuredRecord::canonical_form`]
/// deterministic for a given record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredRecord {
    #[serde(default)]
    pub skills: SkillProfile,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl StructuredRecord {
    /// Canonical string form of the full record, used as input to the
    /// overall similarity score.
    pub fn canonical_form(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
