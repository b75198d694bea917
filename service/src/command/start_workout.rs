//! [`Command`] for starting a [`Workout`].

use common::operations::{Insert, Perform};
use tracerr::Traced;

use crate::{
    domain::{exercise, workout, Workout},
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    AuthorizedError, Service,
};

use super::Command;

/// [`Command`] for starting a new [`Workout`] of the signed-in user.
#[derive(Clone, Debug)]
pub struct StartWorkout {
    /// Name of the performed exercise.
    pub exercise_name: String,

    /// Kind of the performed exercise.
    pub exercise_type: exercise::Kind,
}

impl<A> Command<StartWorkout> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<
            Authorized<Insert<workout::Draft>>,
            Ok = Workout,
            Err = Traced<api::Error>,
        >,
{
    type Ok = Workout;
    type Err = Traced<AuthorizedError>;

    async fn execute(
        &self,
        cmd: StartWorkout,
    ) -> Result<Self::Ok, Self::Err> {
        let StartWorkout {
            exercise_name,
            exercise_type,
        } = cmd;

        self.authorized(Insert(workout::Draft {
            exercise_name,
            exercise_type,
        }))
        .await
        .map_err(tracerr::wrap!())
    }
}
