//! [`Command`] for setting [`Goal`]s.

use common::{
    operations::{Insert, Perform},
    Month,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{goal, Goal},
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    AuthorizedError, Service,
};

use super::Command;

/// [`Command`] for setting [`Goal`]s of the signed-in user in bulk.
#[derive(Clone, Debug)]
pub struct SetGoals {
    /// [`goal::Draft`]s to set.
    pub goals: Vec<goal::Draft>,

    /// [`Month`] whose [`Goal`]s are replaced by the [`goal::Draft`]s.
    ///
    /// If [`None`], the [`goal::Draft`]s are only added or updated.
    pub month: Option<Month>,
}

impl<A> Command<SetGoals> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<
            Authorized<Insert<goal::Calendar>>,
            Ok = Vec<Goal>,
            Err = Traced<api::Error>,
        >,
{
    type Ok = Vec<Goal>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SetGoals) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetGoals { goals, month } = cmd;

        let calendar = match month {
            Some(month) => {
                if let Some(d) = goals.iter().find(|d| !month.contains(d.date)) {
                    return Err(tracerr::new!(E::OutOfMonth {
                        date: d.date,
                        month,
                    }));
                }
                goal::Calendar::for_month(month, goals)
            }
            None if goals.is_empty() => {
                return Err(tracerr::new!(E::NothingToSet));
            }
            None => goal::Calendar { goals, month: None },
        };

        self.authorized(Insert(calendar))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SetGoals`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Backend [`Api`] operation failed.
    #[display("{_0}")]
    Api(AuthorizedError),

    /// No [`goal::Draft`]s and no [`Month`] to clear are provided.
    #[display("No goals to set")]
    NothingToSet,

    /// [`goal::Draft`] is dated outside of the [`Month`] being set.
    #[display("Goal for `{date}` is outside of `{month}`")]
    #[from(ignore)]
    OutOfMonth {
        /// [`Date`] of the [`goal::Draft`].
        ///
        /// [`Date`]: common::Date
        date: common::Date,

        /// [`Month`] being set.
        month: Month,
    },
}

#[cfg(test)]
mod spec {
    use std::{num::NonZeroU32, sync::Arc};

    use common::{Date, Month};

    use crate::{
        command::SignIn,
        domain::{exercise, goal, session::IdentityAssertion},
        infra::api::mock::{Mock, Outcome},
        Command as _, Config, Service,
    };

    use super::{ExecutionError, SetGoals};

    fn draft(month: u8, day: u8) -> goal::Draft {
        goal::Draft {
            exercise_type: exercise::Kind::Squat,
            target_count: NonZeroU32::new(30).unwrap(),
            date: Date::from_ymd(2024, month, day).unwrap(),
        }
    }

    #[tokio::test]
    async fn rejects_drafts_outside_month() {
        let svc = Service::new(
            Config::default(),
            Mock::exchanging(Outcome::Token("be-456")),
        );
        let month: Month = "2024-05".parse().unwrap();

        let err = svc
            .execute(SetGoals {
                goals: vec![draft(5, 2), draft(6, 1)],
                month: Some(month),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::OutOfMonth { date, .. } if date.to_string() == "2024-06-01",
        ));
    }

    #[tokio::test]
    async fn sets_month_goals() {
        let mock = Arc::new(Mock::exchanging(Outcome::Token("be-456")));
        let svc = Service::new(Config::default(), Arc::clone(&mock));
        _ = svc.execute(SignIn::default()).await.unwrap();
        _ = svc
            .execute(SetGoals {
                goals: vec![draft(5, 2), draft(5, 3)],
                month: Some("2024-05".parse().unwrap()),
            })
            .await
            .unwrap_err();
        assert!(mock.requests().is_empty(), "no credentials to send");

        _ = svc
            .execute(SignIn {
                assertion: Some(IdentityAssertion::new("idtok-123")),
                ..SignIn::default()
            })
            .await
            .unwrap();
        let goals = svc
            .execute(SetGoals {
                goals: vec![draft(5, 2), draft(5, 3)],
                month: Some("2024-05".parse().unwrap()),
            })
            .await
            .unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(mock.requests(), ["set_goals:2024-05:2 be-456"]);
    }

    #[tokio::test]
    async fn rejects_nothing_to_set() {
        let svc = Service::new(
            Config::default(),
            Mock::exchanging(Outcome::Token("be-456")),
        );

        let err = svc
            .execute(SetGoals {
                goals: vec![],
                month: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::NothingToSet));
    }
}
