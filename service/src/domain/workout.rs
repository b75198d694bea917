//! [`Workout`] definitions.

use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Exercise;
use crate::domain::exercise;

/// Single performance of an [`Exercise`].
///
/// The backend calls it a "session".
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Workout {
    /// ID of this [`Workout`].
    #[serde(rename = "session_id", alias = "_id")]
    pub id: Id,

    /// Name of the performed [`Exercise`].
    pub exercise_name: String,

    /// Type of the performed [`Exercise`].
    pub exercise_type: String,

    /// Number of repetitions done.
    #[serde(default)]
    pub reps: u32,

    /// Duration of this [`Workout`], in seconds.
    #[serde(default)]
    pub duration: Option<f64>,

    /// Estimated calories burned.
    #[serde(default)]
    pub calories_burned: Option<f64>,

    /// [`DateTime`] when this [`Workout`] was started.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<CreationDateTime>,

    /// Indicator whether this [`Workout`] is finished.
    #[serde(default)]
    pub completed: bool,
}

/// ID of a [`Workout`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Request for starting a new [`Workout`].
#[derive(Clone, Debug, Serialize)]
pub struct Draft {
    /// Name of the [`Exercise`] to perform.
    pub exercise_name: String,

    /// Type of the [`Exercise`] to perform.
    pub exercise_type: exercise::Kind,
}

/// Final results of a [`Workout`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Results {
    /// Number of repetitions done.
    pub reps: u32,

    /// Duration of the [`Workout`], in seconds.
    pub duration: f64,

    /// Indicator whether the [`Workout`] is finished.
    pub completed: bool,
}

/// [`DateTime`] when a [`Workout`] was started.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Workout, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::DateTime;

    use super::Workout;

    #[test]
    fn deserializes_created_workout() {
        let workout: Workout = serde_json::from_str(
            r#"{
                "session_id": "66a1",
                "exercise_name": "Push-ups",
                "exercise_type": "pushup",
                "reps": 0,
                "completed": false
            }"#,
        )
        .unwrap();
        assert_eq!(workout.id.as_ref(), "66a1");
        assert!(workout.timestamp.is_none());
        assert!(workout.duration.is_none());
    }

    #[test]
    fn deserializes_history_entry() {
        let workout: Workout = serde_json::from_str(
            r#"{
                "_id": "66a2",
                "user_id": "google_1",
                "exercise_name": "Squats",
                "exercise_type": "squat",
                "reps": 21,
                "duration": 95.5,
                "completed": true,
                "created_at": "2024-05-01T07:30:00.250000"
            }"#,
        )
        .unwrap();
        assert_eq!(workout.id.as_ref(), "66a2");
        assert_eq!(workout.reps, 21);
        assert_eq!(workout.duration, Some(95.5));
        assert_eq!(
            workout.timestamp.unwrap().unix_timestamp(),
            DateTime::from_rfc3339("2024-05-01T07:30:00Z")
                .unwrap()
                .unix_timestamp(),
        );
    }
}
