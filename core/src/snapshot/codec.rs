use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use intervals_types::{SetField, SetSpec, WorkoutConfig};

use super::SnapshotError;
use crate::workout::parse_field_value;

/// Encode a workout config as a URL-safe snapshot token.
///
/// Field order is fixed by the type definitions, so equal configs always
/// produce equal tokens.
pub fn encode(config: &WorkoutConfig) -> String {
    // Serializing plain structs of strings and integers cannot fail
    let json = serde_json::to_vec(config).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a snapshot token.
///
/// Accepts both the URL-safe and the standard base64 alphabet, padded or not.
/// The payload must be a JSON object with a `sets` array; each object in the
/// array is sanitized (see `sanitize_set`) and non-object entries are dropped.
pub fn decode(token: &str) -> Result<WorkoutConfig, SnapshotError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SnapshotError::Empty);
    }

    let normalized: String = token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let payload: Value = serde_json::from_slice(&bytes)?;

    let entries = payload
        .get("sets")
        .and_then(Value::as_array)
        .ok_or(SnapshotError::MissingSets)?;

    let sets: Vec<SetSpec> = entries
        .iter()
        .filter(|entry| entry.is_object())
        .enumerate()
        .map(|(index, entry)| sanitize_set(index, entry))
        .collect();

    if sets.is_empty() {
        return Err(SnapshotError::NoUsableSets);
    }
    Ok(WorkoutConfig { sets })
}

/// Decode an optional token, falling back to the default workout on any error.
pub fn decode_or_default(token: Option<&str>) -> WorkoutConfig {
    let Some(token) = token else {
        return WorkoutConfig::default();
    };
    match decode(token) {
        Ok(config) => {
            tracing::info!(sets = config.sets.len(), "Loaded workout from snapshot");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid snapshot token");
            WorkoutConfig::default()
        }
    }
}

/// Build a valid set from an arbitrary JSON object.
///
/// Missing or invalid numeric fields take the same fallbacks as a bad edit;
/// a missing or non-string name becomes "Set N".
fn sanitize_set(index: usize, entry: &Value) -> SetSpec {
    let number = |key: &str, field: SetField| -> u32 {
        match entry.get(key) {
            Some(Value::Number(n)) => {
                let raw = n.as_u64().map(|v| v.to_string()).unwrap_or_default();
                parse_field_value(field, &raw)
            }
            Some(Value::String(s)) => parse_field_value(field, s),
            _ => parse_field_value(field, ""),
        }
    };

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| SetSpec::default_name(index));

    SetSpec {
        name,
        work_time: number("workTime", SetField::Work),
        rest_time: number("restTime", SetField::Rest),
        reps: number("reps", SetField::Reps),
    }
}
