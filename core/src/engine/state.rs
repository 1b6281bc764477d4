use intervals_types::Phase;

/// Live state of a run. Owned and mutated only by `PhaseEngine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// 0-based index into the set list
    pub current_set_index: usize,
    /// 1-based rep within the current set
    pub current_rep: u32,
    pub phase: Phase,
    /// Seconds remaining in the current phase
    pub seconds_left: u32,
    pub running: bool,
}

impl TimerState {
    /// Fresh state at the start of a run: first set, first rep, lead-in
    pub fn starting(lead_in_secs: u32) -> Self {
        Self {
            current_set_index: 0,
            current_rep: 1,
            phase: Phase::Ready,
            seconds_left: lead_in_secs,
            running: true,
        }
    }
}
