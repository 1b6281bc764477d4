//! Text rendering for the setup, running and complete screens

use std::fmt::Write;

use intervals_core::{DisplayState, SetSpec};

/// Numbered list of sets as shown on the setup screen
pub fn setup(sets: &[SetSpec], removable: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4} {:<24} {:>6} {:>6} {:>5}", "#", "Name", "Work", "Rest", "Reps");
    let _ = writeln!(out, "{}", "-".repeat(49));
    for (i, set) in sets.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:>5}s {:>5}s {:>5}",
            i + 1,
            set.name,
            set.work_time,
            set.rest_time,
            set.reps
        );
    }
    if !removable {
        out.push_str("(the only set cannot be removed)\n");
    }
    out
}

/// Single status line for the running screen
pub fn running(display: &DisplayState) -> String {
    format!(
        "{:<10} {:>4}  {}  [{}]",
        display.phase_label, display.seconds_left, display.set_label, display.progress
    )
}

pub fn complete() -> String {
    "All sets complete!".to_string()
}
