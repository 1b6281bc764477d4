//! Cue event types and their tone patterns

use std::time::Duration;

/// Events emitted by the phase engine that call for a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueEvent {
    /// Countdown: 3, 2, 1 seconds left in the current phase
    Countdown { seconds_left: u32 },

    /// A work phase finished
    RepComplete { set_index: usize, rep: u32 },

    /// The last rep of a set finished
    SetComplete { set_index: usize },
}

/// A single tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    /// Start time relative to the first tone of the cue
    pub offset: Duration,
}

impl Tone {
    const fn at(frequency_hz: f32, duration_ms: u64, offset_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
            offset: Duration::from_millis(offset_ms),
        }
    }
}

const COUNTDOWN_TONES: [Tone; 1] = [Tone::at(800.0, 100, 0)];
const REP_COMPLETE_TONES: [Tone; 1] = [Tone::at(600.0, 200, 0)];
const SET_COMPLETE_TONES: [Tone; 2] = [Tone::at(400.0, 150, 0), Tone::at(400.0, 150, 200)];

impl CueEvent {
    /// Tones to play for this event, ordered by offset
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            CueEvent::Countdown { .. } => &COUNTDOWN_TONES,
            CueEvent::RepComplete { .. } => &REP_COMPLETE_TONES,
            CueEvent::SetComplete { .. } => &SET_COMPLETE_TONES,
        }
    }

    pub fn is_countdown(&self) -> bool {
        matches!(self, CueEvent::Countdown { .. })
    }
}
