// Prompt constants for the analysis endpoint.

/// System prompt. Constrains the model to JSON-only output; the endpoint
/// parses the reply as-is, so anything outside the JSON object is a failure.
pub const ANALYSIS_SYSTEM: &str =
    "You are a precise ATS-style resume analyzer. Always return ONLY valid JSON.";

/// Builds the analysis instruction sent as the user message.
/// Deterministic: embeds both texts verbatim plus the exact response shape.
pub fn build_analysis_prompt(resume_text: &str, jd_text: &str) -> String {
    format!(
        r#"Analyze how well the following resume matches the following job description.

Return a JSON object with this EXACT schema (no extra fields):
{{
  "matchScore": <integer 0-100>,
  "summary": "<two or three sentence overall assessment>",
  "strengths": ["<requirement the resume clearly satisfies>"],
  "gaps": ["<requirement the resume does not demonstrate>"],
  "suggestions": ["<concrete change that would improve the match>"]
}}

Resume:
{resume_text}

Job Description:
{jd_text}"#
    )
}
