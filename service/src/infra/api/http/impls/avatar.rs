//! [`Avatar`]-related [`Api`] implementations.

use common::operations::{By, Select, Update};
use reqwest::Method;
use serde::{de::IgnoredAny, Deserialize};
use tracerr::Traced;

use crate::{
    domain::{avatar, Avatar},
    infra::{
        api::{self, Authorized, Http},
        Api,
    },
};

/// Body of the [`Avatar`]s list response.
#[derive(Deserialize)]
struct List {
    /// Listed [`Avatar`]s.
    #[serde(default)]
    avatars: Vec<Avatar>,
}

impl Api<Authorized<Select<By<Vec<Avatar>, ()>>>> for Http {
    type Ok = Vec<Avatar>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<Select<By<Vec<Avatar>, ()>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let List { avatars } = self
            .send(self.authorized(
                Method::GET,
                "/api/users/avatars/list",
                &bearer,
            ))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(avatars)
    }
}

impl Api<Authorized<Update<avatar::Selection>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Update(selection),
        }: Authorized<Update<avatar::Selection>>,
    ) -> Result<Self::Ok, Self::Err> {
        let IgnoredAny = self
            .send(
                self.authorized(Method::POST, "/api/users/me/avatar", &bearer)
                    .json(&selection),
            )
            .await
            .map_err(tracerr::wrap!())?;
        Ok(())
    }
}
