use intervals_types::{SetField, SetSpec, WorkoutConfig};

use super::WorkoutError;

/// In-memory set list backing the setup screen.
///
/// Invariant: `sets` is never empty and every set satisfies `SetSpec::is_valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutStore {
    sets: Vec<SetSpec>,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutStore {
    /// Create a store holding the single default set
    pub fn new() -> Self {
        Self::from_config(WorkoutConfig::default())
    }

    /// Create a store from a configuration, repairing any field that
    /// violates its range. An empty list falls back to the default set.
    pub fn from_config(config: WorkoutConfig) -> Self {
        if config.sets.is_empty() {
            return Self::new_unchecked(WorkoutConfig::default().sets);
        }
        let sets = config.sets.into_iter().map(repair).collect();
        Self::new_unchecked(sets)
    }

    fn new_unchecked(sets: Vec<SetSpec>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[SetSpec] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SetSpec> {
        self.sets.get(index)
    }

    /// Whether the remove control should be offered
    pub fn can_remove(&self) -> bool {
        self.sets.len() > 1
    }

    /// Snapshot of the current list as a serializable config
    pub fn config(&self) -> WorkoutConfig {
        WorkoutConfig {
            sets: self.sets.clone(),
        }
    }

    pub fn into_config(self) -> WorkoutConfig {
        WorkoutConfig { sets: self.sets }
    }

    /// Append a copy of the last set's timings named "Set N".
    /// Returns the index of the new set.
    pub fn add_set(&mut self) -> usize {
        let template = self
            .sets
            .last()
            .cloned()
            .unwrap_or_default();
        let index = self.sets.len();
        self.sets.push(SetSpec {
            name: SetSpec::default_name(index),
            ..template
        });
        tracing::debug!(index, "Set added");
        index
    }

    /// Overwrite one field of the set at `index`.
    ///
    /// Names are stored verbatim. Numeric values that fail to parse or fall
    /// outside the field's range are replaced by the field's fallback.
    pub fn edit_field(
        &mut self,
        index: usize,
        field: SetField,
        raw: &str,
    ) -> Result<(), WorkoutError> {
        let len = self.sets.len();
        let set = self
            .sets
            .get_mut(index)
            .ok_or(WorkoutError::IndexOutOfRange { index, len })?;

        match field {
            SetField::Name => set.name = raw.to_string(),
            SetField::Work => set.work_time = parse_field_value(field, raw),
            SetField::Rest => set.rest_time = parse_field_value(field, raw),
            SetField::Reps => set.reps = parse_field_value(field, raw),
        }
        Ok(())
    }

    /// Remove the set at `index`, preserving the order of the rest.
    pub fn remove_set(&mut self, index: usize) -> Result<SetSpec, WorkoutError> {
        let len = self.sets.len();
        if index >= len {
            return Err(WorkoutError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(WorkoutError::InvalidOperation);
        }
        let removed = self.sets.remove(index);
        tracing::debug!(index, name = %removed.name, "Set removed");
        Ok(removed)
    }
}

/// Parse a raw numeric edit for `field`, substituting the field's fallback
/// on parse failure or out-of-range input. `Name` has no numeric value and
/// yields 0.
pub fn parse_field_value(field: SetField, raw: &str) -> u32 {
    let (Some(fallback), Some(range)) = (field.fallback(), field.range()) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if range.contains(&value) => value,
        _ => fallback,
    }
}

fn repair(set: SetSpec) -> SetSpec {
    if set.is_valid() {
        return set;
    }
    let fix = |field: SetField, value: u32| match field.range() {
        Some(range) if range.contains(&value) => value,
        _ => field.fallback().unwrap_or_default(),
    };
    SetSpec {
        work_time: fix(SetField::Work, set.work_time),
        rest_time: fix(SetField::Rest, set.rest_time),
        reps: fix(SetField::Reps, set.reps),
        name: set.name,
    }
}
