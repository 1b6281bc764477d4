use std::time::Duration;

use intervals_core::{AppConfig, CueDispatcher, Session, Ticker, ToneOutput};

use crate::audio::RodioOutput;

/// Holds all state for the CLI application.
/// This is a lightweight container - logic lives in the core session.
pub struct CliContext {
    pub config: AppConfig,
    pub session: Session,
    /// Drives `session.tick()` while a run is active
    pub ticker: Ticker,
}

impl CliContext {
    /// Build a context from loaded preferences and an optional share token.
    pub fn new(config: AppConfig, token: Option<&str>, mute: bool) -> Self {
        let cues = if mute || !config.audio.enabled {
            CueDispatcher::silent()
        } else {
            let gain = config.audio.gain();
            CueDispatcher::new(
                config.audio.clone(),
                Box::new(move || {
                    RodioOutput::open(gain).map(|out| Box::new(out) as Box<dyn ToneOutput>)
                }),
            )
        };

        Self {
            session: Session::from_token(token, cues),
            ticker: Ticker::new(Duration::from_millis(config.tick_millis)),
            config,
        }
    }

    /// Context without sound, for tests and headless use
    pub fn silent(token: Option<&str>) -> Self {
        let config = AppConfig::default();
        Self {
            session: Session::from_token(token, CueDispatcher::silent()),
            ticker: Ticker::new(Duration::from_millis(config.tick_millis)),
            config,
        }
    }
}
