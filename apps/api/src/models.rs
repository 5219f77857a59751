use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One file collected from a multipart field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// The job description side of a submission.
///
/// The form exposes two optional fields (pasted text and an uploaded file);
/// this enum makes the choice explicit. Precedence between the two is decided
/// where the value is constructed, not here.
#[derive(Debug, Clone)]
pub enum JobDescriptionSource {
    Text(String),
    Upload(UploadedFile),
}

/// Uniform wrapper returned by every outcome of the analysis endpoint.
///
/// Success carries `data`, failure carries `error`; the unused side is
/// omitted from the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            message: "Success".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: "Error".to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn round_trip(envelope: &ResponseEnvelope) -> ResponseEnvelope {
        let serialized = serde_json::to_string(envelope).unwrap();
        serde_json::from_str(&serialized).unwrap()
    }

    #[test]
    fn success_round_trips() {
        let envelope = ResponseEnvelope::success(json!({
            "matchScore": 82,
            "strengths": ["Go", "distributed systems"],
            "gaps": ["Kubernetes"]
        }));
        assert_eq!(round_trip(&envelope), envelope);
    }

    #[test]
    fn every_failure_kind_round_trips() {
        let failures = [
            "Missing resume or job description text.",
            "Model quota or rate limit has been exceeded. Please try again later.",
            "Empty response from model.",
            "Model returned invalid JSON. Please try again.",
            "Failed to parse DOCX file: invalid Zip archive",
        ];
        for message in failures {
            let envelope = ResponseEnvelope::error(message);
            assert_eq!(round_trip(&envelope), envelope);
        }
    }

    #[test]
    fn unused_side_is_omitted() {
        let success =
            serde_json::to_value(ResponseEnvelope::success(json!({"matchScore": 50}))).unwrap();
        assert!(success.get("error").is_none());

        let failure = serde_json::to_value(ResponseEnvelope::error("boom")).unwrap();
        assert!(failure.get("data").is_none());
        assert_eq!(failure["message"], "Error");
    }
}
