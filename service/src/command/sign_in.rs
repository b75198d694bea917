//! [`Command`] for signing a user in.

use std::convert::Infallible;

use jsonwebtoken::{DecodingKey, Validation};
use secrecy::ExposeSecret as _;
use serde::Deserialize;
use tracing as log;

use crate::{
    domain::{
        session::{IdentityAssertion, ProviderAccessToken},
        user, Record,
    },
    Service,
};

use super::Command;

/// [`Command`] for signing a user in, once the identity provider sign-in
/// succeeded.
///
/// Replaces any existing session. The [`IdentityAssertion`] is exchanged
/// lazily, on the first [`ResolveBearerToken`], so signing in never waits on
/// the network.
///
/// [`ResolveBearerToken`]: super::ResolveBearerToken
#[derive(Clone, Debug, Default)]
pub struct SignIn {
    /// [`IdentityAssertion`] issued by the identity provider.
    pub assertion: Option<IdentityAssertion>,

    /// [`ProviderAccessToken`] issued by the identity provider.
    pub provider_token: Option<ProviderAccessToken>,

    /// [`user::Profile`] reported by the identity provider.
    ///
    /// Missing fields are filled from the [`IdentityAssertion`] claims.
    pub profile: user::Profile,
}

/// Profile claims of an [`IdentityAssertion`].
#[derive(Debug, Deserialize)]
struct Claims {
    /// Full name of the user.
    #[serde(default)]
    name: Option<String>,

    /// Email of the user.
    #[serde(default)]
    email: Option<String>,

    /// Picture URL of the user.
    #[serde(default)]
    picture: Option<String>,
}

impl Claims {
    /// Reads the [`Claims`] of the provided [`IdentityAssertion`].
    ///
    /// The signature isn't verified here: the backend does it upon the
    /// exchange, and the [`Claims`] are used for display only.
    fn read(
        assertion: &IdentityAssertion,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        jsonwebtoken::decode::<Self>(
            assertion.expose_secret(),
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .map(|data| data.claims)
    }
}

impl<A> Command<SignIn> for Service<A> {
    type Ok = user::Profile;
    type Err = Infallible;

    async fn execute(&self, cmd: SignIn) -> Result<Self::Ok, Self::Err> {
        let SignIn {
            assertion,
            provider_token,
            profile: reported,
        } = cmd;

        let mut profile = user::Profile::default();
        if let Some(assertion) = &assertion {
            match Claims::read(assertion) {
                Ok(Claims {
                    name,
                    email,
                    picture,
                }) => {
                    profile = user::Profile::from_raw(
                        name.as_deref(),
                        email.as_deref(),
                        picture.as_deref(),
                    );
                }
                Err(e) => {
                    log::debug!("Identity assertion has unreadable claims: {e}");
                }
            }
        }
        profile.refresh(reported);

        let record = Record::new(profile.clone(), assertion, provider_token);
        if self.store().replace(record).await.is_some() {
            log::debug!("Previous session replaced by a new sign-in");
        }

        Ok(profile)
    }
}
