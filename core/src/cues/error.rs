//! Error types for audio output

use thiserror::Error;

/// Failures reported by a `ToneOutput`
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio device unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("failed to play tone")]
    Playback(#[source] Box<dyn std::error::Error + Send + Sync>),
}
