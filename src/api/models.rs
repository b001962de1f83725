//! API data models

use serde::{Deserialize, Serialize};

use crate::scoring::AlignmentEntry;

/// Query parameters for the transcript endpoints
#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    pub video_id: Option<String>,
    pub language: Option<String>,
}

/// Query parameters for the compat transcript endpoint (id is in the path)
#[derive(Debug, Deserialize)]
pub struct CompatTranscriptQuery {
    pub language: Option<String>,
}

/// Standard transcript response
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub success: bool,
    pub transcript: String,
    pub language: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Flask-compat transcript response: per-segment timestamps, no `success`
/// field
#[derive(Debug, Serialize)]
pub struct CompatTranscriptResponse {
    pub transcript: String,
    pub timestamps: Vec<f64>,
    pub language: String,
}

/// Request body for transcription validation
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub video_id: Option<String>,
    pub user_transcription: Option<String>,
    pub language: Option<String>,
}

/// Validation response: classified tokens plus the aggregate percentage,
/// and both texts for client-side rendering
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub results: Vec<AlignmentEntry>,
    #[serde(rename = "similarityPercent")]
    pub similarity_percent: f64,
    #[serde(rename = "userInput")]
    pub user_input: String,
    #[serde(rename = "actualTranscript")]
    pub actual_transcript: String,
}
