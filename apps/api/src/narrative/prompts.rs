// LLM prompt constants for the narrative calls. Free-form prose output —
// no JSON contract, so no fence-stripping on the way back.

/// System prompt for the fit-analysis call.
pub const FIT_ANALYSIS_SYSTEM: &str =
    "You are an expert career coach analyzing how well a candidate matches a role. \
    Be direct, specific, and constructive. \
    Format your response with clear headings and bullet points where appropriate.";

/// Fit-analysis prompt template. Replace `{analysis_json}` before sending.
pub const FIT_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following job match data and provide:
1. An overall FIT or NOT FIT assessment as a heading
2. A rating out of 10 for the overall match
3. Specific feedback on Industry match, Experience match, and Skills match
4. 3-5 specific suggestions for improving the resume
5. For skills, indicate which missing skills are most critical to add

Analysis Data:
{analysis_json}"#;

/// System prompt for the improvement-suggestions call.
pub const IMPROVEMENTS_SYSTEM: &str =
    "You are an expert resume writer helping a candidate tailor their resume \
    to a specific role. Give clear, direct advice grounded in the data provided. \
    Format your response as a numbered list.";

/// Improvement-suggestions prompt template.
/// Replace `{job_json}`, `{resume_json}`, `{comparison_json}` before sending.
pub const IMPROVEMENTS_PROMPT_TEMPLATE: &str = r#"Based on the job requirements and resume analysis, provide 5 specific, actionable improvements the candidate could make to their resume to better match this job. For each suggestion:

1. Explain the gap or issue
2. Provide a specific example of how to address it
3. If relevant, include a sample bullet point that could be added to the resume

Job data: {job_json}
Resume data: {resume_json}
Comparison data: {comparison_json}"#;
