//! Authentication-related [`Api`] implementations.

use common::operations::Perform;
use secrecy::ExposeSecret as _;
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::{session::BackendToken, user},
    infra::{
        api::{self, ExchangeAssertion, Exchanged, Http},
        Api,
    },
};

/// Body of the exchange request.
#[derive(Serialize)]
struct Request<'a> {
    /// Exchanged [`IdentityAssertion`].
    ///
    /// [`IdentityAssertion`]: crate::domain::session::IdentityAssertion
    token: &'a str,
}

/// Body of the exchange response.
#[derive(Deserialize)]
struct Response {
    /// Issued [`BackendToken`].
    access_token: String,

    /// User known to the backend.
    user: User,
}

/// User known to the backend.
#[derive(Deserialize)]
struct User {
    /// ID of the user.
    user_id: String,

    /// Name of the user.
    #[serde(default)]
    name: Option<String>,

    /// Email of the user.
    #[serde(default)]
    email: Option<String>,

    /// Picture URL of the user.
    #[serde(default)]
    picture: Option<String>,
}

impl Api<Perform<ExchangeAssertion>> for Http {
    type Ok = Exchanged;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(ExchangeAssertion(assertion)): Perform<ExchangeAssertion>,
    ) -> Result<Self::Ok, Self::Err> {
        let Response { access_token, user } = self
            .send(self.client.post(self.endpoint("/api/auth/google")).json(
                &Request {
                    token: assertion.expose_secret(),
                },
            ))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(Exchanged {
            token: BackendToken::new(access_token),
            user_id: user.user_id.into(),
            profile: user::Profile::from_raw(
                user.name.as_deref(),
                user.email.as_deref(),
                user.picture.as_deref(),
            ),
        })
    }
}
