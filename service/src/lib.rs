//! Service contains the client-side business logic of FitDetect: the
//! session token bridge and the backend API operations built upon it.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::{sync::Arc, time::Duration};

use common::operations::Perform;
use derive_more::{Display, Error, From};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::infra::{
    api::{self, Authorized, ExchangeAssertion, Exchanged},
    Api, Store,
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Maximum [`Duration`] to wait for the identity assertion exchange
    /// before falling back to the provider access token.
    #[default(Duration::from_secs(3))]
    pub exchange_timeout: Duration,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<A> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Backend [`Api`] of this [`Service`].
    api: A,

    /// [`Store`] of the session of this [`Service`].
    store: Arc<Store>,
}

impl<A> Service<A> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, api: A) -> Self {
        Self {
            config,
            api,
            store: Arc::default(),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns backend [`Api`] of this [`Service`].
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the session [`Store`] of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Performs the provided `op`eration via the backend [`Api`] on behalf of
    /// the signed-in user.
    ///
    /// The session is destroyed once the backend rejects its own issued
    /// token. A rejected provider token, or a token of a session replaced
    /// meanwhile, leaves the stored session intact.
    async fn authorized<Op>(
        &self,
        op: Op,
    ) -> Result<<A as Api<Authorized<Op>>>::Ok, Traced<AuthorizedError>>
    where
        A: Api<Authorized<Op>, Err = Traced<api::Error>>
            + Api<
                Perform<ExchangeAssertion>,
                Ok = Exchanged,
                Err = Traced<api::Error>,
            >,
    {
        use AuthorizedError as E;

        let bearer = self
            .execute(command::ResolveBearerToken)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let res = self
            .api()
            .execute(Authorized::new(bearer.clone(), op))
            .await;
        if let Err(e) = &res {
            if e.as_ref().is_unauthorized() {
                if self.store().revoke(&bearer).await.is_some() {
                    log::info!("Backend rejected the session token, signing out");
                } else {
                    log::warn!("Backend rejected the `{}` bearer", bearer.kind());
                }
            }
        }
        res.map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of an [`Api`] operation performed on behalf of the signed-in user.
#[derive(Debug, Display, Error, From)]
pub enum AuthorizedError {
    /// No bearer token could be resolved.
    #[display("Not authenticated: {_0}")]
    Unauthenticated(command::resolve_bearer_token::ExecutionError),

    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),
}

impl AuthorizedError {
    /// Checks whether this [`AuthorizedError`] means the user is not (or no
    /// longer) signed in.
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            Self::Unauthenticated(_) => true,
            Self::Api(e) => e.is_unauthorized(),
        }
    }
}
