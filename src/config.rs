use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scoring::DEFAULT_MISTAKE_THRESHOLD;

/// Configuration for the dictation trainer service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Captions provider settings
    pub provider: ProviderConfig,

    /// Scoring settings
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server binds to
    pub port: u16,

    /// Maximum number of transcripts kept in the request-layer cache
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the captions endpoint
    pub base_url: String,

    /// Request timeout in seconds; the provider call is the only
    /// unbounded-latency operation in the pipeline
    pub timeout_seconds: u64,

    /// Language used when the caller does not specify one
    pub default_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Character-overlap ratio above which a positional mismatch counts as
    /// a near-miss ("mistake") rather than a wrong word
    pub mistake_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                cache_capacity: 1000,
            },
            provider: ProviderConfig::default(),
            scoring: ScoringConfig {
                mistake_threshold: DEFAULT_MISTAKE_THRESHOLD,
            },
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com/api/timedtext".to_string(),
            timeout_seconds: 30,
            default_language: "en".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("DICTATION_PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(capacity) = std::env::var("DICTATION_CACHE_CAPACITY") {
            config.server.cache_capacity = capacity.parse()?;
        }
        if let Ok(url) = std::env::var("DICTATION_PROVIDER_URL") {
            config.provider.base_url = url;
        }
        if let Ok(timeout) = std::env::var("DICTATION_PROVIDER_TIMEOUT") {
            config.provider.timeout_seconds = timeout.parse()?;
        }
        if let Ok(language) = std::env::var("DICTATION_DEFAULT_LANGUAGE") {
            config.provider.default_language = language;
        }
        if let Ok(threshold) = std::env::var("DICTATION_MISTAKE_THRESHOLD") {
            config.scoring.mistake_threshold = threshold.parse()?;
        }

        Ok(config)
    }
}
