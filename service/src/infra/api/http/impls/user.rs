//! User-related [`Api`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    infra::{
        api::{self, Authorized, Http},
        Api,
    },
    read,
};

impl Api<Authorized<Select<By<read::user::Stats, ()>>>> for Http {
    type Ok = read::user::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<
            Select<By<read::user::Stats, ()>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(self.authorized(Method::GET, "/api/users/stats", &bearer))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Select<By<read::user::History, read::user::HistoryLimit>>>>
    for Http
{
    type Ok = read::user::History;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Select(by),
        }: Authorized<
            Select<By<read::user::History, read::user::HistoryLimit>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::user::HistoryLimit(limit) = by.into_inner();
        self.send(
            self.authorized(Method::GET, "/api/users/history", &bearer)
                .query(&[("limit", limit)]),
        )
        .await
        .map_err(tracerr::wrap!())
    }
}
