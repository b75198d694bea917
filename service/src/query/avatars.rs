//! [`Query`] collection related to [`Avatar`]s.

use common::operations::By;

use crate::domain::Avatar;
#[cfg(doc)]
use crate::Query;

use super::ApiQuery;

/// Queries all the [`Avatar`]s available for selection.
pub type List = ApiQuery<By<Vec<Avatar>, ()>>;
