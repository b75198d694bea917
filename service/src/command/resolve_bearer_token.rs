//! [`Command`] for resolving the [`Bearer`] of the signed-in user.

use common::operations::Perform;
use derive_more::{Display, Error};
use tokio::time;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::session::{
    BackendToken, IdentityAssertion, ProviderAccessToken,
};
use crate::{
    domain::session::Bearer,
    infra::{
        api::{self, ExchangeAssertion, Exchanged},
        Api,
    },
    Service,
};

use super::Command;

/// [`Command`] for resolving the [`Bearer`] to authorize backend API calls
/// with.
///
/// On the first resolution after signing in, the [`IdentityAssertion`] is
/// exchanged for a [`BackendToken`]. The exchange happens at most once per
/// session: concurrent resolutions wait for it to settle, and a failed or
/// timed out exchange falls back to the [`ProviderAccessToken`] for the rest
/// of the session.
#[derive(Clone, Copy, Debug)]
pub struct ResolveBearerToken;

impl<A> Command<ResolveBearerToken> for Service<A>
where
    A: Api<
        Perform<ExchangeAssertion>,
        Ok = Exchanged,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Bearer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: ResolveBearerToken,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        // Held until the exchange settles, so it's never done twice.
        let mut session = self.store().lock().await;
        let record = session
            .as_mut()
            .ok_or(E::NotSignedIn)
            .map_err(tracerr::wrap!())?;

        if let Some(bearer) = record.bearer() {
            return Ok(bearer);
        }

        match record.begin_exchange() {
            Some(assertion) => {
                let exchange = self
                    .api()
                    .execute(Perform(ExchangeAssertion(assertion)));
                match time::timeout(self.config().exchange_timeout, exchange)
                    .await
                {
                    Ok(Ok(Exchanged {
                        token,
                        user_id,
                        profile,
                    })) => {
                        log::debug!("Identity assertion exchanged for user `{user_id}`");
                        record.complete_exchange(token, user_id, profile);
                    }
                    Ok(Err(e)) => {
                        log::warn!(
                            "Failed to exchange identity assertion, falling \
                             back to provider access token: {e}\n{}",
                            e.trace(),
                        );
                        record.fall_back();
                    }
                    Err(_) => {
                        log::warn!(
                            "Identity assertion exchange timed out after \
                             {:?}, falling back to provider access token",
                            self.config().exchange_timeout,
                        );
                        record.fall_back();
                    }
                }
            }
            // Exchange abandoned by a cancelled resolution is not retried.
            None => record.fall_back(),
        }

        record
            .bearer()
            .ok_or(E::NoCredentials)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`ResolveBearerToken`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// No user is signed in.
    #[display("No user is signed in")]
    NotSignedIn,

    /// Exchange didn't succeed and there is no [`ProviderAccessToken`] to
    /// fall back to.
    #[display("No credentials available to authorize with")]
    NoCredentials,
}
