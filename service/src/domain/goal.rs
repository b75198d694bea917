//! [`Goal`] definitions.

use std::num::NonZeroU32;

use common::{define_kind, Date, Month};
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

use crate::domain::exercise;

define_kind! {
    #[doc = "Status of a [`Goal`]."]
    enum Status {
        #[doc = "No repetitions recorded yet."]
        Pending,

        #[doc = "Some repetitions recorded, the target is not reached yet."]
        InProgress,

        #[doc = "Target is reached."]
        Completed,

        #[doc = "Day has passed without reaching the target."]
        Missed,
    }
}

/// Daily target of repetitions of an exercise.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Goal {
    /// ID of this [`Goal`].
    pub id: Id,

    /// Kind of the exercise to perform.
    pub exercise_type: exercise::Kind,

    /// Number of repetitions to reach.
    pub target_count: u32,

    /// [`Date`] this [`Goal`] is set for.
    pub date: Date,

    /// Number of repetitions done so far.
    #[serde(default)]
    pub completed_count: u32,

    /// [`Status`] of this [`Goal`].
    pub status: Status,

    /// Progress towards the target, as computed by the backend.
    #[serde(default)]
    pub progress_percentage: u32,
}

impl Goal {
    /// Checks whether the target of this [`Goal`] is reached.
    #[must_use]
    pub fn is_achieved(&self) -> bool {
        self.completed_count >= self.target_count
    }

    /// Computes the [`Progress`] of this [`Goal`] after the provided number
    /// of `reps` is done.
    #[must_use]
    pub fn record_reps(&self, reps: u32) -> Progress {
        let completed_count = self.completed_count.saturating_add(reps);
        Progress {
            update: Update {
                completed_count: Some(completed_count),
                ..Update::default()
            },
            achieved: completed_count >= self.target_count,
        }
    }
}

/// ID of a [`Goal`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Partial update of a [`Goal`].
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Update {
    /// New number of repetitions to reach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<NonZeroU32>,

    /// New number of repetitions done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<u32>,

    /// New [`Status`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// [`Goal`] progress after recording repetitions.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    /// [`Update`] to apply to the [`Goal`].
    pub update: Update,

    /// Indicator whether the target is reached with this [`Progress`].
    pub achieved: bool,
}

/// New [`Goal`] to set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// Kind of the exercise to perform.
    pub exercise_type: exercise::Kind,

    /// Number of repetitions to reach.
    pub target_count: NonZeroU32,

    /// [`Date`] to set the [`Goal`] for.
    pub date: Date,
}

/// Set of [`Draft`]s replacing the [`Goal`]s of a calendar.
#[derive(Clone, Debug, Serialize)]
pub struct Calendar {
    /// [`Draft`]s to set.
    pub goals: Vec<Draft>,

    /// [`Month`] to synchronize: [`Goal`]s of this [`Month`] missing from
    /// the [`Draft`]s are removed by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<Month>,
}

impl Calendar {
    /// Creates a new [`Calendar`] for the provided [`Month`], dropping the
    /// [`Draft`]s outside of it.
    #[must_use]
    pub fn for_month(month: Month, drafts: impl IntoIterator<Item = Draft>) -> Self {
        Self {
            goals: drafts
                .into_iter()
                .filter(|d| month.contains(d.date))
                .collect(),
            month: Some(month),
        }
    }
}

/// Inclusive range of [`Date`]s to select [`Goal`]s within.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    /// First [`Date`] of the range.
    pub start: Date,

    /// Last [`Date`] of the range.
    pub end: Date,
}

impl From<Month> for DateRange {
    fn from(month: Month) -> Self {
        Self {
            start: month.first_day(),
            end: month.last_day(),
        }
    }
}

/// Selector of the [`Goal`]s set for the current day.
#[derive(Clone, Copy, Debug, Default)]
pub struct Today;
