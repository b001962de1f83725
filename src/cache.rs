//! Request-layer LRU cache for fetched transcripts
//!
//! The fetcher itself is stateless; this cache belongs to the API layer and
//! only saves repeated provider round-trips for popular videos.

use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::captions::Transcript;

/// Capacity-bounded LRU keyed by `(video_id, language)`
pub struct TranscriptCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<(String, String), Transcript>,
    /// Recency order, most recent last
    order: Vec<(String, String)>,
}

impl TranscriptCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    pub async fn get(&self, video_id: &str, language: &str) -> Option<Transcript> {
        let key = (video_id.to_string(), language.to_string());
        let mut inner = self.inner.lock().await;

        let transcript = inner.entries.get(&key).cloned()?;
        // Move to the back of the recency order
        inner.order.retain(|k| k != &key);
        inner.order.push(key);
        debug!("Transcript cache hit for {} ({})", video_id, language);
        Some(transcript)
    }

    pub async fn put(&self, video_id: &str, language: &str, transcript: Transcript) {
        if self.capacity == 0 {
            return;
        }

        let key = (video_id.to_string(), language.to_string());
        let mut inner = self.inner.lock().await;

        inner.order.retain(|k| k != &key);
        inner.order.push(key.clone());
        inner.entries.insert(key, transcript);

        while inner.entries.len() > self.capacity {
            let oldest = inner.order.remove(0);
            inner.entries.remove(&oldest);
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
