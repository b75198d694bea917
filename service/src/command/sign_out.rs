//! [`Command`] for signing a user out.

use std::convert::Infallible;

use tracing as log;

use crate::Service;

use super::Command;

/// [`Command`] for signing a user out, destroying the session.
///
/// Signing out without a session is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct SignOut;

impl<A> Command<SignOut> for Service<A> {
    /// Indicator whether there was a session to destroy.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(&self, _: SignOut) -> Result<Self::Ok, Self::Err> {
        let destroyed = self.store().clear().await.is_some();
        if destroyed {
            log::debug!("Session destroyed");
        }
        Ok(destroyed)
    }
}
