//! Command line front end of the [`Service`].

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

pub mod args;
pub mod config;
pub mod dashboard;

use secrecy::ExposeSecret as _;
use service::{
    command::SignIn,
    domain::{
        session::{IdentityAssertion, ProviderAccessToken},
        user,
    },
};
// Used in binary.
use serde_json as _;
use tokio as _;
use tracing_subscriber as _;

pub use self::{args::Args, config::Config, dashboard::Dashboard};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Http>;

/// Builds the [`SignIn`] out of the `configured` and the `provided`
/// identity provider sign-in results, the latter taking precedence.
#[must_use]
pub fn sign_in(configured: config::Session, provided: args::Session) -> SignIn {
    let config::Session {
        id_token,
        access_token,
        name,
        email,
        picture,
    } = configured;

    let assertion = provided
        .id_token
        .or_else(|| id_token.map(|t| t.expose_secret().to_owned()))
        .map(IdentityAssertion::new);
    let provider_token = provided
        .access_token
        .or_else(|| access_token.map(|t| t.expose_secret().to_owned()))
        .map(ProviderAccessToken::new);
    let name = provided.name.or(name);
    let email = provided.email.or(email);
    let picture = provided.picture.or(picture);

    SignIn {
        assertion,
        provider_token,
        profile: user::Profile::from_raw(
            name.as_deref(),
            email.as_deref(),
            picture.as_deref(),
        ),
    }
}
