use intervals_types::{Phase, SetSpec};

use super::{DisplayState, EngineError, TimerState, project};
use crate::cues::CueEvent;

/// Seconds of lead-in before the first work phase
pub const LEAD_IN_SECS: u32 = 5;

/// Countdown cues fire while this many seconds or fewer remain (never at 0)
pub const COUNTDOWN_FROM: u32 = 3;

/// Finite-state countdown for one run.
///
/// Constructed at run start from a snapshot of the set list and dropped when
/// the run ends. Nothing else mutates its `TimerState`.
#[derive(Debug, Clone)]
pub struct PhaseEngine {
    sets: Vec<SetSpec>,
    state: TimerState,
}

impl PhaseEngine {
    /// Start a run over `sets`.
    ///
    /// Rejects an empty list and sets with zero work time or zero reps, which
    /// would otherwise stall or skip phases.
    pub fn new(sets: Vec<SetSpec>) -> Result<Self, EngineError> {
        if sets.is_empty() {
            return Err(EngineError::NoSets);
        }
        for (index, set) in sets.iter().enumerate() {
            if set.work_time == 0 {
                return Err(EngineError::ZeroWorkTime { index });
            }
            if set.reps == 0 {
                return Err(EngineError::ZeroReps { index });
            }
        }

        tracing::info!(sets = sets.len(), lead_in = LEAD_IN_SECS, "Run started");
        Ok(Self {
            sets,
            state: TimerState::starting(LEAD_IN_SECS),
        })
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn sets(&self) -> &[SetSpec] {
        &self.sets
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase == Phase::Complete
    }

    /// Current display projection
    pub fn display(&self) -> DisplayState {
        project(&self.state, &self.sets)
    }

    /// Halt the run. Further ticks are ignored. Idempotent.
    pub fn stop(&mut self) {
        if self.state.running {
            tracing::debug!(
                set = self.state.current_set_index,
                rep = self.state.current_rep,
                "Run stopped"
            );
        }
        self.state.running = false;
    }

    /// Advance the countdown by one period.
    ///
    /// In order: emit a countdown cue if 1..=3 seconds remain; then either
    /// transition (at 0) or decrement. A transition loads the next phase's
    /// full duration without consuming a decrement. Ticks on a stopped engine
    /// are no-ops.
    pub fn tick(&mut self) -> Vec<CueEvent> {
        let mut cues = Vec::new();
        if !self.state.running {
            return cues;
        }

        let seconds_left = self.state.seconds_left;
        if seconds_left > 0 && seconds_left <= COUNTDOWN_FROM {
            cues.push(CueEvent::Countdown { seconds_left });
        }

        if seconds_left == 0 {
            self.next_phase(&mut cues);
        } else {
            self.state.seconds_left -= 1;
        }
        cues
    }

    fn current_set(&self) -> &SetSpec {
        &self.sets[self.state.current_set_index]
    }

    fn is_last_set(&self) -> bool {
        self.state.current_set_index + 1 >= self.sets.len()
    }

    fn next_phase(&mut self, cues: &mut Vec<CueEvent>) {
        match self.state.phase {
            Phase::Ready => self.enter_work(),
            Phase::Work => {
                cues.push(CueEvent::RepComplete {
                    set_index: self.state.current_set_index,
                    rep: self.state.current_rep,
                });

                let set = self.current_set();
                let rest_time = set.rest_time;
                let final_rep_of_run = self.state.current_rep >= set.reps && self.is_last_set();

                if rest_time > 0 && !final_rep_of_run {
                    self.state.phase = Phase::Rest;
                    self.state.seconds_left = rest_time;
                    tracing::debug!(rest_time, rep = self.state.current_rep, "Rest phase");
                } else {
                    self.advance_rep(cues);
                }
            }
            Phase::Rest => self.advance_rep(cues),
            Phase::Complete => self.state.running = false,
        }
    }

    fn advance_rep(&mut self, cues: &mut Vec<CueEvent>) {
        if self.state.current_rep < self.current_set().reps {
            self.state.current_rep += 1;
            self.enter_work();
            return;
        }

        cues.push(CueEvent::SetComplete {
            set_index: self.state.current_set_index,
        });

        if self.is_last_set() {
            self.state.phase = Phase::Complete;
            self.state.seconds_left = 0;
            self.state.running = false;
            tracing::info!(sets = self.sets.len(), "Run complete");
        } else {
            self.state.current_set_index += 1;
            self.state.current_rep = 1;
            tracing::debug!(
                set = self.state.current_set_index,
                name = %self.current_set().name,
                "Next set"
            );
            self.enter_work();
        }
    }

    fn enter_work(&mut self) {
        self.state.phase = Phase::Work;
        self.state.seconds_left = self.current_set().work_time;
        tracing::debug!(
            set = self.state.current_set_index,
            rep = self.state.current_rep,
            seconds = self.state.seconds_left,
            "Work phase"
        );
    }
}
