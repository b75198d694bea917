//! Backend [`Api`]-related implementations.

#[cfg(feature = "http")]
pub mod http;
#[cfg(test)]
pub(crate) mod mock;

use derive_more::{Display, Error as StdError, From};

use crate::domain::{
    session::{BackendToken, Bearer, IdentityAssertion},
    user,
};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Backend API operation.
pub use common::Handler as Api;

/// Operation performed on behalf of the signed-in user.
#[derive(Clone, Debug)]
pub struct Authorized<T> {
    /// [`Bearer`] authorizing the operation.
    pub bearer: Bearer,

    /// Operation to perform.
    pub op: T,
}

impl<T> Authorized<T> {
    /// Authorizes the provided `op`eration with the provided [`Bearer`].
    #[must_use]
    pub fn new(bearer: Bearer, op: T) -> Self {
        Self { bearer, op }
    }
}

/// Exchange of an [`IdentityAssertion`] for a [`BackendToken`].
#[derive(Clone, Debug)]
pub struct ExchangeAssertion(pub IdentityAssertion);

/// Outcome of a successful [`ExchangeAssertion`].
#[derive(Clone, Debug)]
pub struct Exchanged {
    /// Issued [`BackendToken`].
    pub token: BackendToken,

    /// [`user::Id`] assigned by the backend.
    pub user_id: user::Id,

    /// [`user::Profile`] known to the backend.
    pub profile: user::Profile,
}

/// [`Api`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Http`] transport error.
    #[cfg(feature = "http")]
    #[display("HTTP request failed: {_0}")]
    #[from(ignore)]
    Http(http::Error),

    /// Backend rejected the [`Bearer`] as expired or invalid.
    #[display("Backend rejected the bearer token")]
    #[from(ignore)]
    Unauthorized,

    /// Backend responded with a non-success status.
    #[display("Backend responded with `{status}`: {detail}")]
    #[from(ignore)]
    Status {
        /// HTTP status code of the response.
        status: u16,

        /// Body of the response.
        detail: String,
    },

    /// Backend response doesn't match the expected shape.
    #[display("Malformed backend response: {_0}")]
    Malformed(serde_json::Error),
}

#[cfg(feature = "http")]
impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Self::Http(e)
    }
}

impl Error {
    /// Checks whether this [`Error`] means the [`Bearer`] is no longer
    /// accepted.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
