//! Error types for starting a run

use thiserror::Error;

/// Set lists the engine refuses to run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot start a run without any sets")]
    NoSets,

    #[error("set {index} has a work time of zero")]
    ZeroWorkTime { index: usize },

    #[error("set {index} has zero reps")]
    ZeroReps { index: usize },
}
