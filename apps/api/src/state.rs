use std::sync::Arc;

use crate::analysis::compare::Rounding;
use crate::analysis::lexicon::SkillLexicon;
use crate::documents::DocxConverter;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable configuration or a client — analyses share
/// nothing mutable, so a single clone-per-request state is all we need.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Skill reference lists, passed in at construction (not ambient globals)
    /// so the engine stays testable with custom lexicons.
    pub lexicon: Arc<SkillLexicon>,
    /// Pluggable DOCX-to-text converter. Production: external conversion
    /// service; tests: stubs.
    pub docx: Arc<dyn DocxConverter>,
    /// Per-metric rounding policy for comparison results.
    pub rounding: Rounding,
}
