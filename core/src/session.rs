//! Session controller
//!
//! Glue between a presentation host and the timer core. A `Session` owns the
//! workout being edited, the engine of the active run (if any), and the cue
//! dispatcher, and tracks which screen should be visible.
//!
//! The session is synchronous. Hosts call `tick()` once per period while
//! `screen() == Screen::Running`; ticks arriving in any other screen are
//! ignored, which makes late timer callbacks harmless.

use intervals_types::{SetField, WorkoutConfig};

use crate::cues::CueDispatcher;
use crate::engine::{DisplayState, EngineError, PhaseEngine};
use crate::snapshot;
use crate::workout::{WorkoutError, WorkoutStore};

/// Which screen the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Setup,
    Running,
    Complete,
}

#[derive(Debug)]
pub struct Session {
    store: WorkoutStore,
    engine: Option<PhaseEngine>,
    cues: CueDispatcher,
    screen: Screen,
    share_token: Option<String>,
}

impl Session {
    pub fn new(config: WorkoutConfig, cues: CueDispatcher) -> Self {
        Self {
            store: WorkoutStore::from_config(config),
            engine: None,
            cues,
            screen: Screen::Setup,
            share_token: None,
        }
    }

    /// Create a session from an optional share token. Bad tokens are
    /// logged and replaced by the default workout.
    pub fn from_token(token: Option<&str>, cues: CueDispatcher) -> Self {
        Self::new(snapshot::decode_or_default(token), cues)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn cues_mut(&mut self) -> &mut CueDispatcher {
        &mut self.cues
    }

    /// Token written when the last run started
    pub fn share_token(&self) -> Option<&str> {
        self.share_token.as_deref()
    }

    /// Token for the workout as currently edited
    pub fn current_token(&self) -> String {
        snapshot::encode(&self.store.config())
    }

    // ─── Setup Operations ───────────────────────────────────────────────────

    pub fn add_set(&mut self) -> usize {
        self.store.add_set()
    }

    pub fn edit_field(
        &mut self,
        index: usize,
        field: SetField,
        raw: &str,
    ) -> Result<(), WorkoutError> {
        self.store.edit_field(index, field, raw)
    }

    pub fn remove_set(&mut self, index: usize) -> Result<(), WorkoutError> {
        self.store.remove_set(index).map(|_| ())
    }

    // ─── Run Control ────────────────────────────────────────────────────────

    /// Start a run over the current workout.
    ///
    /// Opens audio on first use, records the share token, and returns the
    /// initial display. Any run already in progress is discarded.
    pub fn start(&mut self) -> Result<DisplayState, EngineError> {
        self.reset();
        self.cues.activate();

        let token = self.current_token();
        tracing::debug!(token = %token, "Share token updated");
        self.share_token = Some(token);

        let engine = PhaseEngine::new(self.store.sets().to_vec())?;
        let display = engine.display();
        self.engine = Some(engine);
        self.screen = Screen::Running;
        Ok(display)
    }

    /// Advance the active run by one period and dispatch its cues.
    ///
    /// Returns the updated display, or None when no run is active.
    pub fn tick(&mut self) -> Option<DisplayState> {
        if self.screen != Screen::Running {
            return None;
        }
        let engine = self.engine.as_mut()?;

        for cue in engine.tick() {
            self.cues.dispatch(&cue);
        }
        if engine.is_complete() {
            self.screen = Screen::Complete;
        }
        Some(engine.display())
    }

    /// Display for the active or just-finished run
    pub fn view(&self) -> Option<DisplayState> {
        self.engine.as_ref().map(PhaseEngine::display)
    }

    /// Abandon the run and go back to setup
    pub fn stop(&mut self) {
        self.reset();
    }

    /// Leave the complete screen and go back to setup
    pub fn restart(&mut self) {
        self.reset();
    }

    /// Stop the engine, discard its state, and show setup. Idempotent.
    pub fn reset(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.stop();
        }
        self.screen = Screen::Setup;
    }
}

#[cfg(test)]
mod tests {
    use intervals_types::{Phase, SetSpec};

    use super::*;

    fn session_with(sets: Vec<SetSpec>) -> Session {
        Session::new(WorkoutConfig { sets }, CueDispatcher::silent())
    }

    #[test]
    fn start_shows_lead_in_and_records_token() {
        let mut session = session_with(vec![SetSpec::new("Rows", 3, 2, 2)]);
        assert_eq!(session.share_token(), None);

        let display = session.start().unwrap();

        assert_eq!(session.screen(), Screen::Running);
        assert_eq!(display.phase, Phase::Ready);
        assert_eq!(display.seconds_left, 5);
        let token = session.share_token().unwrap();
        assert_eq!(
            snapshot::decode(token).unwrap(),
            session.store().config()
        );
    }

    #[test]
    fn runs_to_complete_screen() {
        let mut session = session_with(vec![SetSpec::new("Rows", 1, 0, 1)]);
        session.start().unwrap();

        let mut last = None;
        while session.screen() == Screen::Running {
            last = session.tick();
        }

        assert_eq!(session.screen(), Screen::Complete);
        assert_eq!(last.unwrap().phase, Phase::Complete);
        assert!(session.tick().is_none());
    }

    #[test]
    fn stop_returns_to_setup_and_ignores_late_ticks() {
        let mut session = session_with(vec![SetSpec::new("Rows", 3, 2, 2)]);
        session.start().unwrap();
        session.tick();

        session.stop();
        session.stop();

        assert_eq!(session.screen(), Screen::Setup);
        assert!(session.tick().is_none());
        assert!(session.view().is_none());
    }

    #[test]
    fn run_uses_snapshot_of_sets_at_start() {
        let mut session = session_with(vec![SetSpec::new("Rows", 3, 0, 1)]);
        session.start().unwrap();
        session.edit_field(0, SetField::Name, "Renamed").unwrap();

        assert_eq!(session.view().unwrap().set_label, "Rows");
    }

    #[test]
    fn bad_token_loads_default_workout() {
        let session = Session::from_token(Some("definitely not a token"), CueDispatcher::silent());
        assert_eq!(session.store().config(), WorkoutConfig::default());
    }

    #[test]
    fn remove_guard_is_forwarded() {
        let mut session = session_with(vec![SetSpec::new("Rows", 3, 0, 1)]);
        assert_eq!(session.remove_set(0), Err(WorkoutError::InvalidOperation));
        session.add_set();
        assert_eq!(session.remove_set(0), Ok(()));
        assert_eq!(session.store().sets()[0].name, "Set 2");
    }
}
