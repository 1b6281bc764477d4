//! Workout configuration store
//!
//! Holds the ordered list of sets that a run executes. Edits never block on
//! bad numeric input: unparseable or out-of-range values are replaced by the
//! field's fallback. The store always keeps at least one set.

mod error;
mod store;

pub use error::WorkoutError;
pub use store::{WorkoutStore, parse_field_value};
