use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;
use crate::models::ResponseEnvelope;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// every failure leaves the server as the uniform error envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing resume or job description text.")]
    MissingInput,

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    ModelUnavailable(String),

    #[error("Empty response from model.")]
    EmptyResponse,

    #[error("Model returned invalid JSON. Please try again.")]
    MalformedResponse,

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited { message } => AppError::RateLimited(message),
            LlmError::EmptyContent => AppError::EmptyResponse,
            LlmError::Http(e) => AppError::ModelUnavailable(e.to_string()),
            LlmError::Api { status, message } => {
                AppError::ModelUnavailable(format!("Model service error ({status}): {message}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingInput => StatusCode::BAD_REQUEST,
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::RateLimited(msg) => {
                tracing::warn!("Model rate limited: {msg}");
                StatusCode::TOO_MANY_REQUESTS
            }
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Model error: {msg}");
                StatusCode::BAD_GATEWAY
            }
            AppError::EmptyResponse | AppError::MalformedResponse => {
                tracing::error!("Bad model output: {self}");
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ResponseEnvelope::error(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn failure_kinds_map_to_documented_statuses() {
        assert_eq!(status_of(AppError::MissingInput), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::Extraction(ExtractError::UnsupportedType)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::RateLimited("quota exceeded".into())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(AppError::ModelUnavailable("connection refused".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status_of(AppError::EmptyResponse), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_of(AppError::MalformedResponse),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn extraction_message_is_surfaced_verbatim() {
        let err = AppError::Extraction(ExtractError::Docx("invalid Zip archive".into()));
        assert_eq!(
            err.to_string(),
            "Failed to parse DOCX file: invalid Zip archive"
        );
    }

    #[test]
    fn llm_errors_convert_to_the_right_kinds() {
        let rate_limited: AppError = LlmError::RateLimited {
            message: "slow down".into(),
        }
        .into();
        assert!(matches!(rate_limited, AppError::RateLimited(m) if m == "slow down"));

        let empty: AppError = LlmError::EmptyContent.into();
        assert!(matches!(empty, AppError::EmptyResponse));

        let api: AppError = LlmError::Api {
            status: 503,
            message: "overloaded".into(),
        }
        .into();
        assert!(matches!(api, AppError::ModelUnavailable(m) if m.contains("overloaded")));
    }
}
