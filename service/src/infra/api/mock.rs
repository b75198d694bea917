//! In-memory [`Api`] double.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use common::{
    operations::{By, Insert, Perform, Select, Update},
    Date,
};
use secrecy::ExposeSecret as _;
use tokio::time;
use tracerr::Traced;

use crate::{
    domain::{
        exercise, goal,
        session::{BackendToken, Bearer},
        user, workout, Exercise, Goal, Workout,
    },
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
};

/// Outcome of an [`ExchangeAssertion`] performed by a [`Mock`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum Outcome {
    /// Issues the provided [`BackendToken`].
    Token(&'static str),

    /// Fails with the provided HTTP status.
    Status(u16),
}

/// [`Api`] recording the operations it performs.
#[derive(Debug)]
pub(crate) struct Mock {
    /// [`Outcome`] of every [`ExchangeAssertion`].
    outcome: Outcome,

    /// Delay of every [`ExchangeAssertion`].
    delay: Duration,

    /// Delay of every authorized request.
    request_delay: Duration,

    /// Indicator whether every [`Bearer`] is rejected.
    rejecting: bool,

    /// Indicator whether [`Goal`] updates fail.
    failing_goals: bool,

    /// Number of started [`ExchangeAssertion`]s.
    exchanges: AtomicUsize,

    /// Exchanged assertions, in order.
    assertions: Mutex<Vec<String>>,

    /// Performed authorized requests, as `<operation> <bearer>`.
    requests: Mutex<Vec<String>>,
}

impl Mock {
    /// Creates a new [`Mock`] exchanging with the provided [`Outcome`].
    pub(crate) fn exchanging(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay: Duration::ZERO,
            request_delay: Duration::ZERO,
            rejecting: false,
            failing_goals: false,
            exchanges: AtomicUsize::new(0),
            assertions: Mutex::default(),
            requests: Mutex::default(),
        }
    }

    /// Delays every [`ExchangeAssertion`] by the provided [`Duration`].
    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delays the response to every authorized request by the provided
    /// [`Duration`].
    pub(crate) fn responding_after(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Makes the backend reject every [`Bearer`].
    pub(crate) fn rejecting(mut self) -> Self {
        self.rejecting = true;
        self
    }

    /// Makes every [`Goal`] update fail.
    pub(crate) fn failing_goals(mut self) -> Self {
        self.failing_goals = true;
        self
    }

    /// Returns the number of started [`ExchangeAssertion`]s.
    pub(crate) fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }

    /// Returns the exchanged assertions, in order.
    pub(crate) fn exchanged_assertions(&self) -> Vec<String> {
        self.assertions.lock().unwrap().clone()
    }

    /// Returns the performed authorized requests, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Records the provided authorized request.
    async fn record(
        &self,
        op: &str,
        bearer: &Bearer,
    ) -> Result<(), Traced<api::Error>> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{op} {}", bearer.expose_secret()));
        time::sleep(self.request_delay).await;
        if self.rejecting {
            return Err(tracerr::new!(api::Error::Unauthorized));
        }
        Ok(())
    }
}

impl Api<Perform<ExchangeAssertion>> for Mock {
    type Ok = Exchanged;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(ExchangeAssertion(assertion)): Perform<ExchangeAssertion>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.exchanges.fetch_add(1, Ordering::SeqCst);
        self.assertions
            .lock()
            .unwrap()
            .push(assertion.expose_secret().to_owned());

        time::sleep(self.delay).await;

        match self.outcome {
            Outcome::Token(token) => Ok(Exchanged {
                token: BackendToken::new(token),
                user_id: format!("user-{token}").into(),
                profile: user::Profile::default(),
            }),
            Outcome::Status(status) => Err(tracerr::new!(api::Error::Status {
                status,
                detail: "mocked".into(),
            })),
        }
    }
}

impl Api<Authorized<Select<By<Vec<Exercise>, ()>>>> for Mock {
    type Ok = Vec<Exercise>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized { bearer, .. }: Authorized<Select<By<Vec<Exercise>, ()>>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record("list_exercises", &bearer).await?;
        Ok(vec![])
    }
}

impl Api<Authorized<Insert<workout::Draft>>> for Mock {
    type Ok = Workout;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Insert(draft),
        }: Authorized<Insert<workout::Draft>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record(&format!("start_workout:{}", draft.exercise_type), &bearer)
            .await?;
        Ok(Workout {
            id: "w1".into(),
            exercise_name: draft.exercise_name,
            exercise_type: draft.exercise_type.to_string(),
            reps: 0,
            duration: None,
            calories_burned: None,
            timestamp: None,
            completed: false,
        })
    }
}

impl Api<Authorized<Update<(workout::Id, workout::Results)>>> for Mock {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Update((id, results)),
        }: Authorized<Update<(workout::Id, workout::Results)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record(&format!("finish_workout:{id}:{}", results.reps), &bearer)
            .await
    }
}

impl Api<Authorized<Update<(goal::Id, goal::Update)>>> for Mock {
    type Ok = Goal;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Update((id, update)),
        }: Authorized<Update<(goal::Id, goal::Update)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let completed_count = update.completed_count.unwrap_or_default();
        self.record(&format!("update_goal:{id}:{completed_count}"), &bearer)
            .await?;
        if self.failing_goals {
            return Err(tracerr::new!(api::Error::Status {
                status: 500,
                detail: "mocked".into(),
            }));
        }
        Ok(Goal {
            id,
            exercise_type: exercise::Kind::Pushup,
            target_count: 20,
            date: Date::today(),
            completed_count,
            status: goal::Status::InProgress,
            progress_percentage: 0,
        })
    }
}

impl Api<Authorized<Insert<goal::Calendar>>> for Mock {
    type Ok = Vec<Goal>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Authorized {
            bearer,
            op: Insert(calendar),
        }: Authorized<Insert<goal::Calendar>>,
    ) -> Result<Self::Ok, Self::Err> {
        let month = calendar.month.map(|m| m.to_string()).unwrap_or_default();
        self.record(
            &format!("set_goals:{month}:{}", calendar.goals.len()),
            &bearer,
        )
        .await?;
        Ok(calendar
            .goals
            .into_iter()
            .enumerate()
            .map(|(n, d)| Goal {
                id: format!("g{n}").into(),
                exercise_type: d.exercise_type,
                target_count: d.target_count.get(),
                date: d.date,
                completed_count: 0,
                status: goal::Status::Pending,
                progress_percentage: 0,
            })
            .collect())
    }
}
