//! [`Query`] of the current session.

use std::convert::Infallible;

use crate::{domain::session::Snapshot, Service};

use super::Query;

/// Queries the [`Snapshot`] of the current session, if anyone is signed in.
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession;

impl<A> Query<CurrentSession> for Service<A> {
    type Ok = Option<Snapshot>;
    type Err = Infallible;

    async fn execute(&self, _: CurrentSession) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().snapshot().await)
    }
}
