//! HTTP API for the dictation trainer
//!
//! Thin glue over the transcript fetcher and scorer; all the algorithmic
//! content lives in `captions` and `scoring`.

pub mod handlers;
pub mod models;
pub mod server;

use std::sync::Arc;

use crate::cache::TranscriptCache;
use crate::captions::TranscriptFetcher;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<TranscriptFetcher>,
    pub cache: Arc<TranscriptCache>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(fetcher: TranscriptFetcher, config: Config) -> Self {
        Self {
            cache: Arc::new(TranscriptCache::new(config.server.cache_capacity)),
            fetcher: Arc::new(fetcher),
            config: Arc::new(config),
        }
    }
}
