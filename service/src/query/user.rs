//! [`Query`] collection related to the signed-in user.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::Workout, Query};
use crate::read::user::{History as UserHistory, HistoryLimit, Stats as UserStats};

use super::ApiQuery;

/// Queries the totals over all the [`Workout`]s of the signed-in user.
pub type Stats = ApiQuery<By<UserStats, ()>>;

/// Queries the latest [`Workout`]s of the signed-in user, limited to the
/// provided [`HistoryLimit`].
pub type History = ApiQuery<By<UserHistory, HistoryLimit>>;
