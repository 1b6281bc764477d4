//! Error types for snapshot decoding

use thiserror::Error;

/// Reasons a snapshot token was rejected
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot token is empty")]
    Empty,

    #[error("snapshot token is not valid base64")]
    Base64(#[from] base64::DecodeError),

    #[error("snapshot payload is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("snapshot payload has no `sets` list")]
    MissingSets,

    #[error("snapshot contains no usable sets")]
    NoUsableSets,
}
