//! [`Query`] collection related to [`Exercise`]s.

use common::operations::By;

use crate::domain::Exercise;
#[cfg(doc)]
use crate::Query;

use super::ApiQuery;

/// Queries all the available [`Exercise`]s.
pub type List = ApiQuery<By<Vec<Exercise>, ()>>;
