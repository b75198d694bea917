//! [`Goal`] read models definitions.
//!
//! [`Goal`]: crate::domain::Goal

use serde::{Deserialize, Serialize};

/// Summary over all the [`Goal`]s of a user.
///
/// [`Goal`]: crate::domain::Goal
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Stats {
    /// Number of [`Goal`]s set.
    ///
    /// [`Goal`]: crate::domain::Goal
    pub total_goals: u64,

    /// Number of completed [`Goal`]s.
    ///
    /// [`Goal`]: crate::domain::Goal
    pub completed_goals: u64,

    /// Number of [`Goal`]s without any progress.
    ///
    /// [`Goal`]: crate::domain::Goal
    pub pending_goals: u64,

    /// Number of [`Goal`]s in progress.
    ///
    /// [`Goal`]: crate::domain::Goal
    pub in_progress_goals: u64,

    /// Percentage of completed [`Goal`]s.
    ///
    /// [`Goal`]: crate::domain::Goal
    pub completion_rate: f64,
}

impl Stats {
    /// Checks whether the user has never set any goals, so should be offered
    /// the initial goal setup.
    #[must_use]
    pub fn needs_initial_setup(&self) -> bool {
        self.total_goals == 0
    }
}
