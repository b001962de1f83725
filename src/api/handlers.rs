//! API request handlers

use serde_json::Value;
use tracing::info;

use super::models::{
    CompatTranscriptResponse, TranscriptResponse, ValidateRequest, ValidateResponse,
};
use super::AppState;
use crate::captions::Transcript;
use crate::error::TranscriptError;
use crate::scoring::score_with_threshold;

/// Handle health check requests
pub async fn health_check() -> Value {
    serde_json::json!({
        "status": "healthy",
        "service": "dictation-trainer",
        "version": env!("CARGO_PKG_VERSION"),
    })
}

/// Fetch a transcript through the cache, populating it on a miss.
///
/// The cache key uses the resolved language so "en" and "es" requests for
/// the same video stay independent.
async fn fetch_cached(
    state: &AppState,
    video_id: &str,
    language: Option<&str>,
) -> Result<Transcript, TranscriptError> {
    let cache_language = language.unwrap_or(&state.config.provider.default_language);

    if let Some(cached) = state.cache.get(video_id, cache_language).await {
        return Ok(cached);
    }

    let transcript = state.fetcher.fetch_transcript(video_id, language).await?;
    state
        .cache
        .put(video_id, cache_language, transcript.clone())
        .await;
    Ok(transcript)
}

/// Standard transcript lookup: `{success, transcript, language, videoId}`
pub async fn get_transcript(
    state: &AppState,
    video_id: Option<&str>,
    language: Option<&str>,
) -> Result<TranscriptResponse, TranscriptError> {
    let video_id = video_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| TranscriptError::InvalidInput("Video ID is required".to_string()))?;

    let transcript = fetch_cached(state, video_id, language).await?;

    Ok(TranscriptResponse {
        success: true,
        transcript: transcript.cleaned_text,
        language: transcript.language_code,
        video_id: transcript.video_id,
    })
}

/// Flask-compat transcript lookup: `{transcript, timestamps, language}`
pub async fn get_transcript_compat(
    state: &AppState,
    video_id: &str,
    language: Option<&str>,
) -> Result<CompatTranscriptResponse, TranscriptError> {
    let transcript = fetch_cached(state, video_id, language).await?;

    Ok(CompatTranscriptResponse {
        timestamps: transcript.timestamps(),
        transcript: transcript.cleaned_text,
        language: transcript.language_code,
    })
}

/// Score a user transcription against the video's reference transcript
pub async fn validate_transcription(
    state: &AppState,
    request: ValidateRequest,
) -> Result<ValidateResponse, TranscriptError> {
    let video_id = request
        .video_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| TranscriptError::InvalidInput("Video ID is required".to_string()))?;
    let user_transcription = request.user_transcription.as_deref().ok_or_else(|| {
        TranscriptError::InvalidInput("User transcription is required".to_string())
    })?;

    let transcript = fetch_cached(state, video_id, request.language.as_deref()).await?;

    let result = score_with_threshold(
        user_transcription,
        &transcript.cleaned_text,
        state.config.scoring.mistake_threshold,
    );

    info!(
        "Scored transcription for {}: {:.2}% over {} entries",
        video_id,
        result.similarity_percent,
        result.entries.len()
    );

    Ok(ValidateResponse {
        results: result.entries,
        similarity_percent: result.similarity_percent,
        user_input: user_transcription.to_string(),
        actual_transcript: transcript.cleaned_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::{CaptionProvider, CaptionSegment, ProviderFetchError, TranscriptFetcher};
    use crate::config::Config;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CaptionProvider for FixedProvider {
        async fn fetch(
            &self,
            _video_id: &str,
            _language: Option<&str>,
        ) -> Result<Vec<CaptionSegment>, ProviderFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![CaptionSegment {
                text: "hello world".to_string(),
                start_seconds: 0.0,
            }])
        }
    }

    fn test_state() -> (AppState, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FixedProvider {
            calls: calls.clone(),
        };
        let config = Config::default();
        let fetcher = TranscriptFetcher::new(
            Box::new(provider),
            config.provider.default_language.clone(),
        );
        (AppState::new(fetcher, config), calls)
    }

    #[tokio::test]
    async fn test_get_transcript_success_shape() {
        let (state, _) = test_state();
        let response = get_transcript(&state, Some("abc123"), None).await.unwrap();

        assert!(response.success);
        assert_eq!(response.transcript, "hello world");
        assert_eq!(response.video_id, "abc123");
    }

    #[tokio::test]
    async fn test_get_transcript_missing_id_is_invalid_input() {
        let (state, _) = test_state();
        let err = get_transcript(&state, None, None).await.unwrap_err();
        assert!(matches!(err, TranscriptError::InvalidInput(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_repeated_fetch_hits_cache() {
        let (state, calls) = test_state();
        get_transcript(&state, Some("abc123"), None).await.unwrap();
        get_transcript(&state, Some("abc123"), None).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_compat_response_has_timestamps() {
        let (state, _) = test_state();
        let response = get_transcript_compat(&state, "abc123", None).await.unwrap();
        assert_eq!(response.timestamps, vec![0.0]);
        assert_eq!(response.transcript, "hello world");
    }

    #[tokio::test]
    async fn test_validate_scores_against_fetched_transcript() {
        let (state, _) = test_state();
        let response = validate_transcription(
            &state,
            ValidateRequest {
                video_id: Some("abc123".to_string()),
                user_transcription: Some("hello world".to_string()),
                language: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.similarity_percent, 100.0);
        assert_eq!(response.actual_transcript, "hello world");
        assert_eq!(response.user_input, "hello world");
    }

    #[tokio::test]
    async fn test_validate_requires_user_transcription() {
        let (state, _) = test_state();
        let err = validate_transcription(
            &state,
            ValidateRequest {
                video_id: Some("abc123".to_string()),
                user_transcription: None,
                language: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, TranscriptError::InvalidInput(_)));
    }
}
