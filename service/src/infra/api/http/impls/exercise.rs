//! [`Exercise`]-related [`Api`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::Exercise,
    infra::{
        api::{self, Authorized, Http},
        Api,
    },
};

impl Api<Authorized<Select<By<Vec<Exercise>, ()>>>> for Http {
    type Ok = Vec<Exercise>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<Select<By<Vec<Exercise>, ()>>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.send(self.authorized(Method::GET, "/api/exercises/", &bearer))
            .await
            .map_err(tracerr::wrap!())
    }
}
