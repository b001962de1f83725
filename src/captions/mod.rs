//! Transcript acquisition: provider fallback, noise cleaning, timestamps

pub mod noise;
pub mod provider;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TranscriptError;
pub use noise::NoiseFilter;
pub use provider::{CaptionProvider, CaptionSegment, ProviderFetchError, TimedTextProvider};

/// A fetched caption track with its cleaned text.
///
/// Derived per call, never stored; the fetcher makes no consistency promise
/// across calls for the same video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "languageCode")]
    pub language_code: String,
    /// Original ordered segments, kept for callers that need timestamps
    pub segments: Vec<CaptionSegment>,
    /// Space-joined segment texts with noise markers removed, trimmed
    #[serde(rename = "cleanedText")]
    pub cleaned_text: String,
}

impl Transcript {
    /// Per-segment start times in seconds, in chronological order
    pub fn timestamps(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.start_seconds).collect()
    }
}

/// Fetches caption tracks with two-tier language fallback and cleans them.
///
/// Stateless per call: no cache, no shared mutable state, so arbitrarily
/// many fetches may run concurrently without coordination.
pub struct TranscriptFetcher {
    provider: Box<dyn CaptionProvider>,
    noise_filter: NoiseFilter,
    default_language: String,
}

impl TranscriptFetcher {
    pub fn new(provider: Box<dyn CaptionProvider>, default_language: String) -> Self {
        Self {
            provider,
            noise_filter: NoiseFilter::new(),
            default_language,
        }
    }

    /// Fetch the caption track for `video_id`, preferring `preferred_language`
    /// (the configured default when `None`).
    ///
    /// Retry policy is exactly two tiers, one immediate attempt each: the
    /// preferred language, then the provider's default track. Caption
    /// availability is a data-existence question, not a transient-failure
    /// one, so there is no backoff.
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        preferred_language: Option<&str>,
    ) -> Result<Transcript, TranscriptError> {
        if video_id.trim().is_empty() {
            return Err(TranscriptError::InvalidInput(
                "Video ID is required".to_string(),
            ));
        }

        let requested = preferred_language
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&self.default_language);

        info!("Fetching transcript for {} (language: {})", video_id, requested);

        let first = self.provider.fetch(video_id, Some(requested)).await;
        let (segments, language_code) = match first {
            Ok(segments) => (segments, requested.to_string()),
            Err(first_err) => {
                debug!(
                    "Preferred language '{}' unavailable for {}: {}",
                    requested, video_id, first_err
                );
                // Second tier: the provider's default/auto track
                match self.provider.fetch(video_id, None).await {
                    Ok(segments) => (segments, "default".to_string()),
                    Err(second_err) => {
                        warn!(
                            "No caption track for {} in any tier (requested: {})",
                            video_id, requested
                        );
                        return Err(Self::exhausted(video_id, requested, first_err, second_err));
                    }
                }
            }
        };

        // A successful call with zero segments is still "not found"
        if segments.is_empty() {
            return Err(TranscriptError::NoTranscript {
                video_id: video_id.to_string(),
                requested_language: requested.to_string(),
            });
        }

        let raw_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let cleaned_text = self.noise_filter.strip(&raw_text);

        info!(
            "Fetched transcript for {}: {} segments, {} chars cleaned",
            video_id,
            segments.len(),
            cleaned_text.len()
        );

        Ok(Transcript {
            video_id: video_id.to_string(),
            language_code,
            segments,
            cleaned_text,
        })
    }

    /// Map an exhausted fallback chain onto the error taxonomy: both tiers
    /// failing upstream is a provider problem, anything else means no track
    /// exists.
    fn exhausted(
        video_id: &str,
        requested: &str,
        first: ProviderFetchError,
        second: ProviderFetchError,
    ) -> TranscriptError {
        match (first, second) {
            (ProviderFetchError::Upstream(first_msg), ProviderFetchError::Upstream(second_msg)) => {
                TranscriptError::Provider {
                    message: format!("{}; {}", first_msg, second_msg),
                }
            }
            _ => TranscriptError::NoTranscript {
                video_id: video_id.to_string(),
                requested_language: requested.to_string(),
            },
        }
    }
}
