//! Tests for snapshot encoding and tolerant decoding

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use proptest::prelude::*;

use intervals_types::{SetSpec, WorkoutConfig};

use super::{SnapshotError, decode, decode_or_default, encode};

fn token_for_json(json: &str) -> String {
    STANDARD.encode(json)
}

fn sample_config() -> WorkoutConfig {
    WorkoutConfig {
        sets: vec![
            SetSpec::new("Jumping Jacks", 30, 10, 3),
            SetSpec::new("Plank ✓", 45, 0, 2),
        ],
    }
}

#[test]
fn round_trips_config() {
    let config = sample_config();
    let token = encode(&config);
    assert_eq!(decode(&token).unwrap(), config);
}

#[test]
fn encoding_is_stable_and_url_safe() {
    let config = sample_config();
    let token = encode(&config);
    assert_eq!(token, encode(&config.clone()));
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        "token contains URL-unsafe characters: {token}"
    );
}

#[test]
fn accepts_padded_standard_alphabet_tokens() {
    // Token format produced by btoa(JSON.stringify(config)) in the browser
    let token = token_for_json(
        r#"{"sets":[{"name":"Set 1","workTime":10,"restTime":20,"reps":10}]}"#,
    );
    assert!(token.ends_with('='));
    assert_eq!(decode(&token).unwrap(), WorkoutConfig::default());
}

#[test]
fn rejects_garbage() {
    assert!(matches!(decode(""), Err(SnapshotError::Empty)));
    assert!(matches!(decode("!!not base64!!"), Err(SnapshotError::Base64(_))));
    assert!(matches!(
        decode(&token_for_json("not json")),
        Err(SnapshotError::Json(_))
    ));
    assert!(matches!(
        decode(&token_for_json(r#"{"sets":"nope"}"#)),
        Err(SnapshotError::MissingSets)
    ));
    assert!(matches!(
        decode(&token_for_json(r#"[1,2,3]"#)),
        Err(SnapshotError::MissingSets)
    ));
    assert!(matches!(
        decode(&token_for_json(r#"{"sets":[]}"#)),
        Err(SnapshotError::NoUsableSets)
    ));
}

#[test]
fn invalid_token_falls_back_to_default() {
    assert_eq!(decode_or_default(Some("%%%")), WorkoutConfig::default());
    assert_eq!(decode_or_default(None), WorkoutConfig::default());

    let token = encode(&sample_config());
    assert_eq!(decode_or_default(Some(&token)), sample_config());
}

#[test]
fn sanitizes_partial_entries() {
    let token = token_for_json(
        r#"{"sets":[
            {"name":"Zeroes","workTime":0,"restTime":-4,"reps":0},
            42,
            {"workTime":"25","reps":3.5},
            {"name":7,"workTime":15,"restTime":5,"reps":2}
        ]}"#,
    );

    let config = decode(&token).unwrap();

    assert_eq!(
        config.sets,
        vec![
            SetSpec::new("Zeroes", 10, 0, 1),
            SetSpec::new("Set 2", 25, 0, 1),
            SetSpec::new("Set 3", 15, 5, 2),
        ]
    );
}

fn valid_set() -> impl Strategy<Value = SetSpec> {
    (".*", 1u32..=999, 0u32..=999, 1u32..=999)
        .prop_map(|(name, work, rest, reps)| SetSpec::new(name, work, rest, reps))
}

proptest! {
    #[test]
    fn round_trips_any_valid_config(sets in prop::collection::vec(valid_set(), 1..=8)) {
        let config = WorkoutConfig { sets };
        prop_assert_eq!(decode(&encode(&config)).ok(), Some(config));
    }

    #[test]
    fn decode_never_panics(token in ".{0,64}") {
        let _ = decode(&token);
    }

    #[test]
    fn decoded_sets_always_valid(
        work in any::<i64>(),
        rest in any::<i64>(),
        reps in any::<i64>(),
    ) {
        let json = format!(
            r#"{{"sets":[{{"name":"x","workTime":{work},"restTime":{rest},"reps":{reps}}}]}}"#
        );
        let config = decode(&token_for_json(&json)).unwrap();
        prop_assert!(config.sets.iter().all(SetSpec::is_valid));
    }
}
