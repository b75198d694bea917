//! [`Query`] collection related to [`Goal`]s.

use common::{
    operations::{By, Perform, Select},
    Month,
};
use tracerr::Traced;

use crate::{
    domain::{exercise, goal, Goal},
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    read, AuthorizedError, Service,
};

use super::{ApiQuery, Query};

/// Queries the [`Goal`]s set within the provided [`goal::DateRange`].
pub type ByDateRange = ApiQuery<By<Vec<Goal>, goal::DateRange>>;

/// Queries the [`Goal`]s set for the current day.
pub type Today = ApiQuery<By<Vec<Goal>, goal::Today>>;

/// Queries the [`Goal`] set for the current day for the provided
/// [`exercise::Kind`], if any.
pub type ByExercise = ApiQuery<By<Option<Goal>, exercise::Kind>>;

/// Queries the totals over all the [`Goal`]s of the signed-in user.
pub type Stats = ApiQuery<By<read::goal::Stats, ()>>;

/// Queries the [`Goal`]s set within the provided [`Month`].
#[derive(Clone, Copy, Debug)]
pub struct ForMonth(pub Month);

impl<A> Query<ForMonth> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<
            Authorized<Select<By<Vec<Goal>, goal::DateRange>>>,
            Ok = Vec<Goal>,
            Err = Traced<api::Error>,
        >,
{
    type Ok = Vec<Goal>;
    type Err = Traced<AuthorizedError>;

    async fn execute(
        &self,
        ForMonth(month): ForMonth,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(ByDateRange::by(month.into()))
            .await
            .map_err(tracerr::wrap!())
    }
}
