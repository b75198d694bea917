//! [`Api`] implementations of [`Http`].
//!
//! [`Api`]: crate::infra::Api
//! [`Http`]: super::Http

mod auth;
mod avatar;
mod exercise;
mod goal;
mod user;
mod workout;
