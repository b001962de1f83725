/// Dictation Trainer - Rust Implementation
///
/// Transcript acquisition and scoring pipeline: fetches caption tracks with
/// multi-language fallback, cleans them, and scores user transcriptions
/// against the reference text word by word.

pub mod api;
pub mod cache;
pub mod captions;
pub mod config;
pub mod error;
pub mod scoring;

// Re-export main types for easy access
pub use crate::cache::TranscriptCache;
pub use crate::captions::{
    CaptionProvider, CaptionSegment, NoiseFilter, ProviderFetchError, TimedTextProvider,
    Transcript, TranscriptFetcher,
};
pub use crate::config::Config;
pub use crate::error::TranscriptError;
pub use crate::scoring::{
    canonicalize_tokens, compute_alignment_entries, compute_similarity_percent, normalize, score,
    tokenize, AlignmentEntry, EntryKind, ScoreResult,
};
