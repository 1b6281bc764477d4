//! Cue dispatch with a lazily opened audio output
//!
//! Audio devices often refuse to start until the user has interacted with
//! the app, so the output is opened on the first `activate()` (run start)
//! rather than at construction. It is opened at most once.

use intervals_types::AudioSettings;

use super::{AudioError, CueEvent, Tone};

/// Platform facility that can play tones
pub trait ToneOutput {
    /// Queue `tones` for playback without blocking the caller
    fn play(&mut self, tones: &[Tone]) -> Result<(), AudioError>;
}

/// Opens the audio output on first activation
pub type OutputFactory = Box<dyn FnOnce() -> Result<Box<dyn ToneOutput>, AudioError>>;

enum OutputSlot {
    /// Not opened yet
    Pending(OutputFactory),
    Ready(Box<dyn ToneOutput>),
    /// Opening failed or no output was provided; stays silent for good
    Unavailable,
}

/// Maps cue events to tone requests.
pub struct CueDispatcher {
    settings: AudioSettings,
    output: OutputSlot,
}

impl std::fmt::Debug for CueDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = match self.output {
            OutputSlot::Pending(_) => "pending",
            OutputSlot::Ready(_) => "ready",
            OutputSlot::Unavailable => "unavailable",
        };
        f.debug_struct("CueDispatcher")
            .field("settings", &self.settings)
            .field("output", &output)
            .finish()
    }
}

impl CueDispatcher {
    pub fn new(settings: AudioSettings, factory: OutputFactory) -> Self {
        Self {
            settings,
            output: OutputSlot::Pending(factory),
        }
    }

    /// Dispatcher that never produces sound
    pub fn silent() -> Self {
        Self {
            settings: AudioSettings {
                enabled: false,
                ..AudioSettings::default()
            },
            output: OutputSlot::Unavailable,
        }
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: AudioSettings) {
        self.settings = settings;
    }

    /// True once an output has been opened successfully
    pub fn is_active(&self) -> bool {
        matches!(self.output, OutputSlot::Ready(_))
    }

    /// Open the audio output if this is the first activation.
    pub fn activate(&mut self) {
        let factory = match std::mem::replace(&mut self.output, OutputSlot::Unavailable) {
            OutputSlot::Pending(factory) => factory,
            opened => {
                self.output = opened;
                return;
            }
        };

        match factory() {
            Ok(output) => {
                tracing::debug!("Audio output opened");
                self.output = OutputSlot::Ready(output);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Audio output unavailable, cues disabled");
            }
        }
    }

    /// Request the tones for `event`. Failures are logged and dropped.
    pub fn dispatch(&mut self, event: &CueEvent) {
        if !self.settings.enabled {
            return;
        }
        if event.is_countdown() && !self.settings.countdown_enabled {
            return;
        }
        let OutputSlot::Ready(output) = &mut self.output else {
            return;
        };

        if let Err(e) = output.play(event.tones()) {
            tracing::debug!(error = %e, ?event, "Cue playback failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        played: Rc<RefCell<Vec<Vec<Tone>>>>,
        fail: bool,
    }

    impl ToneOutput for Recorder {
        fn play(&mut self, tones: &[Tone]) -> Result<(), AudioError> {
            if self.fail {
                return Err(AudioError::Unavailable {
                    reason: "device unplugged".into(),
                });
            }
            self.played.borrow_mut().push(tones.to_vec());
            Ok(())
        }
    }

    fn dispatcher_with(recorder: Recorder, opens: Rc<Cell<u32>>) -> CueDispatcher {
        CueDispatcher::new(
            AudioSettings::default(),
            Box::new(move || -> Result<Box<dyn ToneOutput>, AudioError> {
                opens.set(opens.get() + 1);
                Ok(Box::new(recorder))
            }),
        )
    }

    #[test]
    fn output_opens_once_on_first_activation() {
        let opens = Rc::new(Cell::new(0));
        let mut cues = dispatcher_with(Recorder::default(), Rc::clone(&opens));
        assert_eq!(opens.get(), 0);

        cues.activate();
        cues.activate();

        assert_eq!(opens.get(), 1);
        assert!(cues.is_active());
    }

    #[test]
    fn events_before_activation_are_silent() {
        let recorder = Recorder::default();
        let mut cues = dispatcher_with(recorder.clone(), Rc::new(Cell::new(0)));

        cues.dispatch(&CueEvent::Countdown { seconds_left: 3 });

        assert!(recorder.played.borrow().is_empty());
    }

    #[test]
    fn set_complete_plays_two_spaced_tones() {
        let recorder = Recorder::default();
        let mut cues = dispatcher_with(recorder.clone(), Rc::new(Cell::new(0)));
        cues.activate();

        cues.dispatch(&CueEvent::SetComplete { set_index: 0 });

        let played = recorder.played.borrow();
        assert_eq!(played.len(), 1);
        let tones = &played[0];
        assert_eq!(tones.len(), 2);
        assert_eq!(tones[0].frequency_hz, 400.0);
        assert!(tones[1].offset > tones[0].duration);
    }

    #[test]
    fn each_event_kind_has_distinct_tone() {
        let countdown = CueEvent::Countdown { seconds_left: 1 }.tones()[0];
        let rep = CueEvent::RepComplete { set_index: 0, rep: 1 }.tones()[0];
        let set = CueEvent::SetComplete { set_index: 0 }.tones()[0];
        assert_ne!(countdown.frequency_hz, rep.frequency_hz);
        assert_ne!(rep.frequency_hz, set.frequency_hz);
        assert_ne!(countdown.duration, rep.duration);
    }

    #[test]
    fn countdown_toggle_is_respected() {
        let recorder = Recorder::default();
        let mut cues = dispatcher_with(recorder.clone(), Rc::new(Cell::new(0)));
        cues.set_settings(AudioSettings {
            countdown_enabled: false,
            ..AudioSettings::default()
        });
        cues.activate();

        cues.dispatch(&CueEvent::Countdown { seconds_left: 2 });
        cues.dispatch(&CueEvent::RepComplete { set_index: 0, rep: 1 });

        assert_eq!(recorder.played.borrow().len(), 1);
    }

    #[test]
    fn failed_open_leaves_dispatcher_silent() {
        let opens = Rc::new(Cell::new(0));
        let counter = Rc::clone(&opens);
        let mut cues = CueDispatcher::new(
            AudioSettings::default(),
            Box::new(move || -> Result<Box<dyn ToneOutput>, AudioError> {
                counter.set(counter.get() + 1);
                Err(AudioError::Unavailable {
                    reason: "no device".into(),
                })
            }),
        );

        cues.activate();
        cues.activate();
        cues.dispatch(&CueEvent::SetComplete { set_index: 0 });

        assert_eq!(opens.get(), 1);
        assert!(!cues.is_active());
    }

    #[test]
    fn playback_errors_are_swallowed() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut cues = dispatcher_with(recorder, Rc::new(Cell::new(0)));
        cues.activate();

        cues.dispatch(&CueEvent::RepComplete { set_index: 0, rep: 1 });

        assert!(cues.is_active());
    }
}
