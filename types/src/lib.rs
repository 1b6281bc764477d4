//! Shared configuration types for the interval timer
//!
//! This crate contains serializable types that are shared between
//! the timer core (intervals-core) and any presentation host (intervals-cli).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Field Bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound for every numeric set field (matches the setup form inputs)
pub const MAX_FIELD_VALUE: u32 = 999;

/// Work time used when an edit cannot be parsed or is out of range
pub const DEFAULT_WORK_SECS: u32 = 10;

/// Rest time used when an edit cannot be parsed or is out of range
pub const DEFAULT_REST_SECS: u32 = 0;

/// Rep count used when an edit cannot be parsed or is out of range
pub const DEFAULT_REPS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Set Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// One configured exercise set.
///
/// Serialized with camelCase keys so share tokens stay compatible with the
/// browser version of the timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSpec {
    /// User-editable label, not required to be unique
    pub name: String,
    /// Seconds of work per rep (≥ 1)
    pub work_time: u32,
    /// Seconds of rest after each rep (0 = no rest phase)
    pub rest_time: u32,
    /// Number of reps (≥ 1)
    pub reps: u32,
}

impl SetSpec {
    pub fn new(name: impl Into<String>, work_time: u32, rest_time: u32, reps: u32) -> Self {
        Self {
            name: name.into(),
            work_time,
            rest_time,
            reps,
        }
    }

    /// Label given to the set at 0-based `index` when no name is supplied
    pub fn default_name(index: usize) -> String {
        format!("Set {}", index + 1)
    }

    /// True if all numeric fields are inside their allowed ranges
    pub fn is_valid(&self) -> bool {
        WORK_RANGE.contains(&self.work_time)
            && REST_RANGE.contains(&self.rest_time)
            && REPS_RANGE.contains(&self.reps)
    }
}

impl Default for SetSpec {
    fn default() -> Self {
        Self::new("Set 1", 10, 20, 10)
    }
}

/// Allowed work times in seconds
pub const WORK_RANGE: std::ops::RangeInclusive<u32> = 1..=MAX_FIELD_VALUE;
/// Allowed rest times in seconds
pub const REST_RANGE: std::ops::RangeInclusive<u32> = 0..=MAX_FIELD_VALUE;
/// Allowed rep counts
pub const REPS_RANGE: std::ops::RangeInclusive<u32> = 1..=MAX_FIELD_VALUE;

/// Ordered list of sets. Order defines execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutConfig {
    pub sets: Vec<SetSpec>,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            sets: vec![SetSpec::default()],
        }
    }
}

/// Editable field of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetField {
    Name,
    Work,
    Rest,
    Reps,
}

impl SetField {
    /// Value substituted when a numeric edit is rejected (None for `Name`)
    pub fn fallback(&self) -> Option<u32> {
        match self {
            SetField::Name => None,
            SetField::Work => Some(DEFAULT_WORK_SECS),
            SetField::Rest => Some(DEFAULT_REST_SECS),
            SetField::Reps => Some(DEFAULT_REPS),
        }
    }

    /// Accepted range for numeric fields (None for `Name`)
    pub fn range(&self) -> Option<std::ops::RangeInclusive<u32>> {
        match self {
            SetField::Name => None,
            SetField::Work => Some(WORK_RANGE),
            SetField::Rest => Some(REST_RANGE),
            SetField::Reps => Some(REPS_RANGE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetField::Name => "name",
            SetField::Work => "work",
            SetField::Rest => "rest",
            SetField::Reps => "reps",
        }
    }
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown set field '{}' (expected name, work, rest or reps)", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for SetField {
    type Err = UnknownField;

    /// Accepts short names as well as the form input ids ("work-input", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_suffix("-input").unwrap_or(&key);
        match key {
            "name" | "set-name" => Ok(SetField::Name),
            "work" | "work_time" | "worktime" => Ok(SetField::Work),
            "rest" | "rest_time" | "resttime" => Ok(SetField::Rest),
            "reps" => Ok(SetField::Reps),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Phase
// ─────────────────────────────────────────────────────────────────────────────

/// Activity within the current rep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Lead-in before the first work phase
    #[default]
    Ready,
    Work,
    Rest,
    /// All sets finished (terminal)
    Complete,
}

impl Phase {
    /// Label shown above the countdown
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Ready => "GET READY",
            Phase::Work => "WORK",
            Phase::Rest => "REST",
            Phase::Complete => "COMPLETE",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Audio cue preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master enable for all cues
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Volume level (0-100)
    #[serde(default = "default_audio_volume")]
    pub volume: u8,

    /// Enable the 3-2-1 countdown beeps
    #[serde(default = "default_true")]
    pub countdown_enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_audio_volume() -> u8 {
    80
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 80,
            countdown_enabled: true,
        }
    }
}

impl AudioSettings {
    /// Volume as a 0.0-1.0 gain factor
    pub fn gain(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}

/// Application preferences.
///
/// Note: Persistence methods (load/save) are provided by intervals-core via the
/// `AppConfigExt` trait. Workouts themselves are never stored here; they travel
/// only as share tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub audio: AudioSettings,

    /// Tick period in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_tick_millis() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            tick_millis: default_tick_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_spec_uses_camel_case_keys() {
        let json = serde_json::to_string(&SetSpec::new("Plank", 30, 0, 3)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Plank","workTime":30,"restTime":0,"reps":3}"#
        );
    }

    #[test]
    fn default_workout_has_one_set() {
        let config = WorkoutConfig::default();
        assert_eq!(config.sets.len(), 1);
        assert_eq!(config.sets[0], SetSpec::new("Set 1", 10, 20, 10));
    }

    #[test]
    fn field_parses_short_and_input_names() {
        assert_eq!("work".parse::<SetField>(), Ok(SetField::Work));
        assert_eq!("work-input".parse::<SetField>(), Ok(SetField::Work));
        assert_eq!("REST".parse::<SetField>(), Ok(SetField::Rest));
        assert_eq!("reps-input".parse::<SetField>(), Ok(SetField::Reps));
        assert_eq!("set-name-input".parse::<SetField>(), Ok(SetField::Name));
        assert!("tempo".parse::<SetField>().is_err());
    }

    #[test]
    fn validity_respects_zero_rest() {
        assert!(SetSpec::new("a", 1, 0, 1).is_valid());
        assert!(!SetSpec::new("a", 0, 5, 1).is_valid());
        assert!(!SetSpec::new("a", 5, 5, 0).is_valid());
        assert!(!SetSpec::new("a", 1000, 5, 1).is_valid());
    }

    #[test]
    fn app_config_fills_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"audio":{"volume":40}}"#).unwrap();
        assert_eq!(config.tick_millis, 1000);
        assert!(config.audio.enabled);
        assert_eq!(config.audio.volume, 40);
        assert!((config.audio.gain() - 0.4).abs() < f32::EPSILON);
    }
}
