//! Audio cues for timer events
//!
//! The engine emits `CueEvent`s; the `CueDispatcher` turns them into tone
//! requests for whatever `ToneOutput` the host provides. Sound is strictly
//! best-effort: a missing or failing output never affects the timer.

mod dispatcher;
mod error;
mod events;

pub use dispatcher::{CueDispatcher, OutputFactory, ToneOutput};
pub use error::AudioError;
pub use events::{CueEvent, Tone};
