//! Static skill reference lists used for keyword-style extraction.
//!
//! The lexicon is configuration, not ambient state: it is built once at
//! startup and carried in `AppState`, so the engine stays pure and callers
//! can swap in custom lists for tests.

/// Common technical skills for reference.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "sql",
    "nosql",
    "mongodb",
    "mysql",
    "postgresql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "machine learning",
    "data science",
    "ai",
    "nlp",
    "computer vision",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "tableau",
    "power bi",
];

/// Common soft skills for reference.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "problem solving",
    "critical thinking",
    "leadership",
    "time management",
    "adaptability",
    "creativity",
    "work ethic",
    "interpersonal",
    "collaboration",
    "flexibility",
    "organization",
    "self-motivation",
    "conflict resolution",
    "decision making",
    "stress management",
    "attention to detail",
    "customer service",
    "presentation skills",
    "negotiation",
    "mentoring",
    "project management",
];

/// The two reference lists the skill extractor scans for.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillLexicon {
    /// The built-in reference lists.
    pub fn default_sets() -> Self {
        Self {
            technical: TECHNICAL_SKILLS.iter().map(|s| s.to_string()).collect(),
            soft: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for SkillLexicon {
    fn default() -> Self {
        Self::default_sets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets_are_nonempty() {
        let lexicon = SkillLexicon::default_sets();
        assert!(!lexicon.technical.is_empty());
        assert!(!lexicon.soft.is_empty());
    }

    #[test]
    fn test_lexicon_entries_are_lowercase() {
        let lexicon = SkillLexicon::default_sets();
        for skill in lexicon.technical.iter().chain(lexicon.soft.iter()) {
            assert_eq!(skill, &skill.to_lowercase());
        }
    }

    #[test]
    fn test_no_overlap_between_categories() {
        let lexicon = SkillLexicon::default_sets();
        for skill in &lexicon.technical {
            assert!(!lexicon.soft.contains(skill), "{skill} is in both lists");
        }
    }
}
