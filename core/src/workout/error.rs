//! Error types for workout configuration edits

use thiserror::Error;

/// Errors during structural edits of the set list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    #[error("cannot remove the only remaining set")]
    InvalidOperation,

    #[error("set index {index} out of range (have {len} sets)")]
    IndexOutOfRange { index: usize, len: usize },
}
