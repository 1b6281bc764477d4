pub mod context;
pub mod cues;
pub mod engine;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod workout;

// Re-exports for convenience
pub use context::{AppConfig, AppConfigExt, AudioSettings, ConfigError};
pub use cues::{AudioError, CueDispatcher, CueEvent, OutputFactory, Tone, ToneOutput};
pub use engine::{DisplayState, EngineError, PhaseEngine, TimerState};
pub use intervals_types::{Phase, SetField, SetSpec, WorkoutConfig};
pub use scheduler::{Tick, Ticker};
pub use session::{Screen, Session};
pub use snapshot::SnapshotError;
pub use workout::{WorkoutError, WorkoutStore};
