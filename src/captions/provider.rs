//! External captions provider interface and the YouTube timedtext implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::ProviderConfig;

/// One caption chunk as delivered by the provider, in chronological order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Spoken text of this chunk
    pub text: String,
    /// Start time of the chunk in seconds
    #[serde(rename = "startSeconds")]
    pub start_seconds: f64,
}

/// Failure modes of a single provider fetch attempt.
///
/// `NotFound` means the requested track does not exist (a data-existence
/// answer, safe to fall back from); `Upstream` means the provider itself
/// failed and falling back to another language is unlikely to help, but we
/// try anyway since the tiers are independent requests.
#[derive(Debug)]
pub enum ProviderFetchError {
    NotFound,
    Upstream(String),
}

impl std::fmt::Display for ProviderFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderFetchError::NotFound => write!(f, "caption track not found"),
            ProviderFetchError::Upstream(msg) => write!(f, "provider failure: {}", msg),
        }
    }
}

/// Trait for caption track providers
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// Fetch the caption track for a video. `language: None` selects the
    /// provider's default/auto track.
    async fn fetch(
        &self,
        video_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<CaptionSegment>, ProviderFetchError>;
}

/// Captions provider backed by the YouTube timedtext endpoint (`fmt=json3`)
pub struct TimedTextProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl TimedTextProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    fn track_url(&self, video_id: &str, language: Option<&str>) -> Result<Url, ProviderFetchError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ProviderFetchError::Upstream(format!("invalid provider URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("v", video_id)
            .append_pair("fmt", "json3");
        if let Some(lang) = language {
            url.query_pairs_mut().append_pair("lang", lang);
        }

        Ok(url)
    }

    /// Parse the json3 timedtext body into ordered segments.
    ///
    /// Events without text runs (style/window events) are skipped.
    fn parse_track(body: &serde_json::Value) -> Vec<CaptionSegment> {
        let mut segments = Vec::new();

        let events = match body["events"].as_array() {
            Some(events) => events,
            None => return segments,
        };

        for event in events {
            let start_ms = event["tStartMs"].as_f64().unwrap_or(0.0);
            let runs = match event["segs"].as_array() {
                Some(runs) => runs,
                None => continue,
            };

            let text: String = runs
                .iter()
                .filter_map(|run| run["utf8"].as_str())
                .collect::<Vec<_>>()
                .join("");
            let text = text.replace('\n', " ").trim().to_string();

            if !text.is_empty() {
                segments.push(CaptionSegment {
                    text,
                    start_seconds: start_ms / 1000.0,
                });
            }
        }

        segments
    }
}

#[async_trait]
impl CaptionProvider for TimedTextProvider {
    async fn fetch(
        &self,
        video_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<CaptionSegment>, ProviderFetchError> {
        let url = self.track_url(video_id, language)?;
        debug!(
            "Requesting caption track for {} (language: {})",
            video_id,
            language.unwrap_or("default")
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderFetchError::Upstream(e.to_string()))?;

        if response.status().as_u16() == 404 {
            return Err(ProviderFetchError::NotFound);
        }
        if !response.status().is_success() {
            return Err(ProviderFetchError::Upstream(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderFetchError::Upstream(e.to_string()))?;

        // The endpoint answers an empty body for videos/languages with no track
        if body.trim().is_empty() {
            return Err(ProviderFetchError::NotFound);
        }

        let parsed: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ProviderFetchError::Upstream(format!("malformed track data: {}", e)))?;

        let segments = Self::parse_track(&parsed);
        if segments.is_empty() {
            return Err(ProviderFetchError::NotFound);
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_track_url_includes_language_when_present() {
        let provider = TimedTextProvider::new(ProviderConfig::default());

        let url = provider.track_url("abc123", Some("es")).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("v=abc123"));
        assert!(query.contains("lang=es"));
        assert!(query.contains("fmt=json3"));

        let url = provider.track_url("abc123", None).unwrap();
        assert!(!url.query().unwrap().contains("lang="));
    }

    #[test]
    fn test_parse_track_joins_runs_and_converts_timestamps() {
        let body = serde_json::json!({
            "events": [
                { "tStartMs": 0.0, "segs": [{ "utf8": "hello " }, { "utf8": "world" }] },
                { "tStartMs": 1500.0 },
                { "tStartMs": 3200.0, "segs": [{ "utf8": "again\n" }] },
            ]
        });

        let segments = TimedTextProvider::parse_track(&body);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "hello world");
        assert_eq!(segments[0].start_seconds, 0.0);
        assert_eq!(segments[1].text, "again");
        assert_eq!(segments[1].start_seconds, 3.2);
    }

    #[test]
    fn test_parse_track_empty_events() {
        let body = serde_json::json!({ "events": [] });
        assert!(TimedTextProvider::parse_track(&body).is_empty());

        let body = serde_json::json!({ "other": 1 });
        assert!(TimedTextProvider::parse_track(&body).is_empty());
    }
}
