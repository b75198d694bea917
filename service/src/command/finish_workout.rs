//! [`Command`] for finishing a [`Workout`].

use common::operations::{Perform, Update};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{goal, workout, Goal},
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    AuthorizedError, Service,
};

use super::Command;
#[cfg(doc)]
use crate::domain::Workout;

/// [`Command`] for finishing a [`Workout`], recording its results and
/// crediting its repetitions to the [`Goal`] of the day.
#[derive(Clone, Debug)]
pub struct FinishWorkout {
    /// ID of the finished [`Workout`].
    pub workout_id: workout::Id,

    /// Number of repetitions done.
    pub reps: u32,

    /// Duration of the [`Workout`], in seconds.
    pub duration: f64,

    /// [`Goal`] of the day for the performed exercise, if any.
    pub goal: Option<Goal>,
}

/// Output of [`FinishWorkout`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Goal`] with the repetitions credited, if it was updated.
    pub goal: Option<Goal>,

    /// Indicator whether the [`Goal`] target was reached with this
    /// [`Workout`].
    pub achieved: bool,
}

impl<A> Command<FinishWorkout> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<
            Authorized<Update<(goal::Id, goal::Update)>>,
            Ok = Goal,
            Err = Traced<api::Error>,
        > + Api<
            Authorized<Update<(workout::Id, workout::Results)>>,
            Ok = (),
            Err = Traced<api::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<AuthorizedError>;

    async fn execute(
        &self,
        cmd: FinishWorkout,
    ) -> Result<Self::Ok, Self::Err> {
        let FinishWorkout {
            workout_id,
            reps,
            duration,
            goal,
        } = cmd;

        let mut output = Output {
            goal: None,
            achieved: false,
        };
        if let Some(goal) = goal {
            let progress = goal.record_reps(reps);
            // Results are recorded even if the `Goal` is failed to update.
            match self.authorized(Update((goal.id, progress.update))).await {
                Ok(updated) => {
                    output = Output {
                        goal: Some(updated),
                        achieved: progress.achieved,
                    };
                }
                Err(e) => {
                    log::warn!("Failed to credit reps to the goal: {e}");
                }
            }
        }

        self.authorized(Update((
            workout_id,
            workout::Results {
                reps,
                duration,
                completed: true,
            },
        )))
        .await
        .map_err(tracerr::wrap!())?;

        Ok(output)
    }
}
