//! Error taxonomy for the transcript pipeline

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the transcript acquisition pipeline.
///
/// Every variant maps onto an HTTP status and a structured JSON payload so
/// the API layer never has to invent its own error shapes.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Caller supplied a missing or malformed video id
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No caption track exists in any attempted language
    #[error("No transcript found for video '{video_id}' (requested language: {requested_language})")]
    NoTranscript {
        video_id: String,
        requested_language: String,
    },

    /// The upstream captions provider failed or returned malformed data
    #[error("Captions provider error: {message}")]
    Provider { message: String },
}

impl TranscriptError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            TranscriptError::InvalidInput(_) => 400,
            TranscriptError::NoTranscript { .. } => 404,
            TranscriptError::Provider { .. } => 500,
        }
    }

    /// Structured JSON payload for API responses.
    ///
    /// Always `{"success": false, "error": ...}`; transcript lookups also
    /// carry the video id and the originally requested language so callers
    /// can diagnose fallback exhaustion.
    pub fn to_payload(&self) -> Value {
        match self {
            TranscriptError::NoTranscript {
                video_id,
                requested_language,
            } => serde_json::json!({
                "success": false,
                "error": self.to_string(),
                "videoId": video_id,
                "requestedLanguage": requested_language,
            }),
            _ => serde_json::json!({
                "success": false,
                "error": self.to_string(),
            }),
        }
    }
}
