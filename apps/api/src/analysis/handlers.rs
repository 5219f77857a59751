//! Axum route handler for the analysis endpoint.
//!
//! One submission runs the full pipeline in order: receive the multipart
//! form, extract text from the uploaded documents, build the prompt, make a
//! single model call, parse the reply as JSON, respond with the envelope.
//! Each step has its own failure exit through `AppError`.

use anyhow::anyhow;
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::{JobDescriptionSource, ResponseEnvelope, UploadedFile};
use crate::state::AppState;

/// Raw fields of one submission, as collected from the multipart form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<UploadedFile>,
    job_description_text: Option<String>,
    job_description_file: Option<UploadedFile>,
}

impl AnalyzeForm {
    async fn from_multipart(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Invalid multipart form: {e}")))?
        {
            // Copy the name out up front; reading the body consumes the field.
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => {
                    let filename = field.file_name().unwrap_or("resume").to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Internal(anyhow!("Invalid resume upload: {e}")))?;
                    form.resume = Some(UploadedFile { filename, bytes });
                }
                "jobDescriptionText" => {
                    let text = field.text().await.map_err(|e| {
                        AppError::Internal(anyhow!("Invalid job description text: {e}"))
                    })?;
                    form.job_description_text = Some(text);
                }
                "jobDescriptionFile" => {
                    let filename = field.file_name().unwrap_or("job_description").to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::Internal(anyhow!("Invalid job description upload: {e}"))
                    })?;
                    form.job_description_file = Some(UploadedFile { filename, bytes });
                }
                _ => {} // unknown fields are ignored
            }
        }
        Ok(form)
    }

    /// Validates presence and resolves the two optional job-description
    /// fields into the tagged source. An uploaded file wins over pasted
    /// text; empty pasted text counts as absent.
    fn into_inputs(self) -> Result<(UploadedFile, JobDescriptionSource), AppError> {
        let resume = self.resume.ok_or(AppError::MissingInput)?;
        let text = self.job_description_text.filter(|t| !t.is_empty());
        let source = match (self.job_description_file, text) {
            (Some(file), _) => JobDescriptionSource::Upload(file),
            (None, Some(text)) => JobDescriptionSource::Text(text),
            (None, None) => return Err(AppError::MissingInput),
        };
        Ok((resume, source))
    }
}

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let form = AnalyzeForm::from_multipart(&mut multipart).await?;
    let (resume, job_description) = form.into_inputs()?;

    let resume_text = extract_text(&resume.filename, &resume.bytes)?;
    let jd_text = match job_description {
        JobDescriptionSource::Text(text) => text,
        JobDescriptionSource::Upload(file) => extract_text(&file.filename, &file.bytes)?,
    };

    // Image-only documents extract to nothing; treat that as missing input.
    if resume_text.is_empty() || jd_text.is_empty() {
        return Err(AppError::MissingInput);
    }

    info!(
        resume_chars = resume_text.len(),
        jd_chars = jd_text.len(),
        "Running analysis"
    );

    let prompt = build_analysis_prompt(&resume_text, &jd_text);
    let content = state.llm.analyze(&prompt, ANALYSIS_SYSTEM).await?;
    let data = parse_analysis(&content)?;

    Ok(Json(ResponseEnvelope::success(data)))
}

/// Parses the model's reply as JSON. The reply is used as-is: a fenced or
/// prose-wrapped reply is rejected rather than cleaned up.
fn parse_analysis(content: &str) -> Result<Value, AppError> {
    serde_json::from_str(content).map_err(|_| AppError::MalformedResponse)
}
