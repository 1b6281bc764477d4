//! Countdown phase engine
//!
//! Drives a run through its phases one tick at a time:
//!
//! ```text
//!   Ready ──► Work ──► Rest ──► Work ──► ... ──► Complete
//!               │                 ▲
//!               └── (no rest / ───┘
//!                    final rep)
//! ```
//!
//! Each `tick()` either decrements the countdown or, when it has reached
//! zero, performs one transition. Ticks return the cue events they produced;
//! display text is derived on demand from the live state (see `display`).

mod display;
mod error;
mod phase_engine;
mod state;


pub use display::{DisplayState, project};
pub use error::EngineError;
pub use phase_engine::{COUNTDOWN_FROM, LEAD_IN_SECS, PhaseEngine};
pub use state::TimerState;
