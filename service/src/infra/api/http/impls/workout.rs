//! [`Workout`]-related [`Api`] implementations.

use common::operations::{Insert, Update};
use reqwest::Method;
use serde::de::IgnoredAny;
use tracerr::Traced;

use crate::{
    domain::{workout, Workout},
    infra::{
        api::{self, Authorized, Http},
        Api,
    },
};

impl Api<Authorized<Insert<workout::Draft>>> for Http {
    type Ok = Workout;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Insert(draft),
        }: Authorized<Insert<workout::Draft>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(
            self.authorized(Method::POST, "/api/sessions/", &bearer)
                .json(&draft),
        )
        .await
        .map_err(tracerr::wrap!())
    }
}

impl Api<Authorized<Update<(workout::Id, workout::Results)>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Update((id, results)),
        }: Authorized<Update<(workout::Id, workout::Results)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = format!("/api/sessions/{id}");
        let IgnoredAny = self
            .send(self.authorized(Method::PUT, &path, &bearer).json(&results))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(())
    }
}
