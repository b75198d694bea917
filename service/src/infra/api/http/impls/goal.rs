//! [`Goal`]-related [`Api`] implementations.

use common::operations::{By, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{exercise, goal, Goal},
    infra::{
        api::{self, Authorized, Http},
        Api,
    },
    read,
};

impl Api<Authorized<Select<By<Vec<Goal>, goal::DateRange>>>> for Http {
    type Ok = Vec<Goal>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Select(by),
        }: Authorized<Select<By<Vec<Goal>, goal::DateRange>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let goal::DateRange { start, end } = by.into_inner();
        self.send(self.authorized(Method::GET, "/api/goals", &bearer).query(&[
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
        ]))
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Select<By<Vec<Goal>, goal::Today>>>> for Http {
    type Ok = Vec<Goal>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<
            Select<By<Vec<Goal>, goal::Today>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(self.authorized(Method::GET, "/api/goals/today", &bearer))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Select<By<Option<Goal>, exercise::Kind>>>> for Http {
    type Ok = Option<Goal>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Select(by),
        }: Authorized<Select<By<Option<Goal>, exercise::Kind>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/api/goals/exercise/{}", by.into_inner());
        self.send(self.authorized(Method::GET, &path, &bearer))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Select<By<read::goal::Stats, ()>>>> for Http {
    type Ok = read::goal::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<
            Select<By<read::goal::Stats, ()>>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(self.authorized(
            Method::GET,
            "/api/goals/stats/summary",
            &bearer,
        ))
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Update<(goal::Id, goal::Update)>>> for Http {
    type Ok = Goal;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Update((id, update)),
        }: Authorized<Update<(goal::Id, goal::Update)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/api/goals/{id}");
        self.send(self.authorized(Method::PUT, &path, &bearer).json(&update))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Insert<goal::Calendar>>> for Http {
    type Ok = Vec<Goal>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Insert(calendar),
        }: Authorized<Insert<goal::Calendar>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(
            self.authorized(Method::POST, "/api/goals/bulk", &bearer)
                .json(&calendar),
        )
        .await
        .map_err(tracerr::wrap!())
    }
}
