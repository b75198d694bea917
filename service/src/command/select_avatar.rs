//! [`Command`] for selecting an [`Avatar`].

use common::operations::{Perform, Update};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Avatar;
use crate::{
    domain::avatar,
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    AuthorizedError, Service,
};

use super::Command;

/// [`Command`] for selecting the [`Avatar`] of the signed-in user.
#[derive(Clone, Debug, From)]
pub struct SelectAvatar(pub avatar::Id);

impl<A> Command<SelectAvatar> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<
            Authorized<Update<avatar::Selection>>,
            Ok = (),
            Err = Traced<api::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<AuthorizedError>;

    async fn execute(
        &self,
        SelectAvatar(avatar_id): SelectAvatar,
    ) -> Result<Self::Ok, Self::Err> {
        self.authorized(Update(avatar::Selection { avatar_id }))
            .await
            .map_err(tracerr::wrap!())
    }
}
