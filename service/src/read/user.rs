//! User read models definitions.

use serde::{Deserialize, Serialize};

use crate::domain::Workout;

/// Totals over all the [`Workout`]s of a user.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Stats {
    /// Number of [`Workout`]s done.
    pub total_sessions: u64,

    /// Number of repetitions done.
    pub total_reps: u64,

    /// Time spent working out, in seconds.
    pub total_duration: f64,
}

/// Maximum number of the latest [`Workout`]s to list in a user history.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HistoryLimit(pub u16);

impl Default for HistoryLimit {
    fn default() -> Self {
        Self(5)
    }
}

/// History of the latest [`Workout`]s of a user.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct History {
    /// Latest [`Workout`]s, most recent first.
    #[serde(default, rename = "sessions")]
    pub workouts: Vec<Workout>,
}
