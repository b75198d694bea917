//! Infrastructure implementations.

pub mod api;
pub mod store;

#[cfg(feature = "http")]
pub use self::api::{http, Http};
pub use self::{api::Api, store::Store};
