// LLM prompt constants for structured extraction.

/// System prompt for job-description parsing — enforces JSON-only output.
pub const JOB_PARSE_SYSTEM: &str =
    "You are an expert job description analyst. \
    Parse a job description and extract structured information. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job-description parsing prompt template. Replace `{job_text}` before sending.
pub const JOB_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the job description and return it in JSON format:
1. Industry
2. Experience (in years and level)
3. Skills (separated into technical and soft skills, lowercase skill names)
4. Educational requirements
5. Job title
6. Key responsibilities

Job description:
{job_text}

Return a JSON object with this EXACT schema (no extra fields):
{
    "industry": "",
    "experience": {"years": "", "level": ""},
    "skills": {"technical": [], "soft": []},
    "education": "",
    "title": "",
    "responsibilities": []
}"#;

/// System prompt for resume parsing — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert resume analyst. \
    Parse a candidate resume and extract structured information. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the candidate's resume and return it in JSON format:
1. Industry experience
2. Total experience (in years and level)
3. Skills (separated into technical and soft skills, lowercase skill names)
4. Education
5. Previous job titles
6. Key achievements

Resume text:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
    "industry": "",
    "experience": {"years": "", "level": ""},
    "skills": {"technical": [], "soft": []},
    "education": "",
    "titles": [],
    "achievements": []
}"#;
