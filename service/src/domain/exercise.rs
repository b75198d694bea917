//! [`Exercise`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

define_kind! {
    #[doc = "Kind of an [`Exercise`] the client is able to track."]
    enum Kind {
        #[doc = "Push-ups."]
        Pushup,

        #[doc = "Squats."]
        Squat,
    }
}

/// Exercise available for a workout.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Exercise {
    /// ID of this [`Exercise`].
    #[serde(rename = "exercise_id")]
    pub id: Id,

    /// Human-readable name of this [`Exercise`].
    pub name: String,

    /// Type of this [`Exercise`].
    ///
    /// Kept raw, as the backend may list exercises this client doesn't
    /// track yet.
    #[serde(rename = "type")]
    pub kind: String,

    /// Description of this [`Exercise`].
    #[serde(default)]
    pub description: Option<String>,
}

impl Exercise {
    /// Returns the [`Kind`] of this [`Exercise`], if it's a tracked one.
    #[must_use]
    pub fn tracked_kind(&self) -> Option<Kind> {
        self.kind.parse().ok()
    }
}

/// ID of an [`Exercise`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);
