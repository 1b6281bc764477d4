use intervals_types::{Phase, SetSpec};

use super::TimerState;

/// What the running screen shows. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub phase: Phase,
    /// "GET READY", "WORK", "REST" or "COMPLETE"
    pub phase_label: &'static str,
    /// Current set name, or the upcoming set during the last rep's rest
    pub set_label: String,
    pub seconds_left: u32,
    /// "Rep X/Y - Set A/B"
    pub progress: String,
}

/// Project the live state onto display text.
///
/// While resting after the final rep of a set, the label looks ahead: the
/// next set's name if there is one, otherwise a "Last Set" marker.
pub fn project(state: &TimerState, sets: &[SetSpec]) -> DisplayState {
    let index = state.current_set_index.min(sets.len().saturating_sub(1));
    let current = sets.get(index);
    let total_reps = current.map(|s| s.reps).unwrap_or_default();
    let on_final_rep = state.current_rep >= total_reps;

    let set_label = match (state.phase, on_final_rep, sets.get(index + 1)) {
        (Phase::Rest, true, Some(next)) => format!("Upcoming: {}", next.name),
        (Phase::Rest, true, None) => "Last Set".to_string(),
        _ => current.map(|s| s.name.clone()).unwrap_or_default(),
    };

    DisplayState {
        phase: state.phase,
        phase_label: state.phase.label(),
        set_label,
        seconds_left: state.seconds_left,
        progress: format!(
            "Rep {}/{} - Set {}/{}",
            state.current_rep,
            total_reps,
            index + 1,
            sets.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<SetSpec> {
        vec![
            SetSpec::new("Squats", 20, 10, 2),
            SetSpec::new("Lunges", 20, 10, 2),
        ]
    }

    fn state(set: usize, rep: u32, phase: Phase, seconds_left: u32) -> TimerState {
        TimerState {
            current_set_index: set,
            current_rep: rep,
            phase,
            seconds_left,
            running: true,
        }
    }

    #[test]
    fn ready_phase_shows_preparing_label() {
        let display = project(&TimerState::starting(5), &sets());
        assert_eq!(display.phase_label, "GET READY");
        assert_eq!(display.set_label, "Squats");
        assert_eq!(display.seconds_left, 5);
        assert_eq!(display.progress, "Rep 1/2 - Set 1/2");
    }

    #[test]
    fn rest_on_final_rep_shows_upcoming_set() {
        let display = project(&state(0, 2, Phase::Rest, 10), &sets());
        assert_eq!(display.phase_label, "REST");
        assert_eq!(display.set_label, "Upcoming: Lunges");
    }

    #[test]
    fn rest_on_final_rep_of_last_set_shows_marker() {
        let display = project(&state(1, 2, Phase::Rest, 10), &sets());
        assert_eq!(display.set_label, "Last Set");
        assert_eq!(display.progress, "Rep 2/2 - Set 2/2");
    }

    #[test]
    fn rest_mid_set_shows_current_name() {
        let display = project(&state(0, 1, Phase::Rest, 4), &sets());
        assert_eq!(display.set_label, "Squats");
    }

    #[test]
    fn work_on_final_rep_shows_current_name() {
        let display = project(&state(0, 2, Phase::Work, 4), &sets());
        assert_eq!(display.phase_label, "WORK");
        assert_eq!(display.set_label, "Squats");
    }
}
