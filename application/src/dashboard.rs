//! [`Dashboard`] of the signed-in user.

use common::Month;
use serde::Serialize;
use service::{
    domain::{session::Snapshot, Exercise, Goal, Workout},
    query::{self, goals::ForMonth, session::CurrentSession},
    read, AuthorizedError, Query as _,
};
use tracerr::Traced;
use tracing as log;

use crate::Service;

/// Overview of the signed-in user's activity.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Dashboard {
    /// Current session, if anyone is signed in.
    pub session: Option<Snapshot>,

    /// Initials to display in place of a missing picture.
    pub initials: String,

    /// Available [`Exercise`]s.
    pub exercises: Vec<Exercise>,

    /// Latest [`Workout`]s.
    pub recent_workouts: Vec<Workout>,

    /// Totals over all the [`Workout`]s.
    pub stats: read::user::Stats,

    /// [`Goal`]s of the current month.
    pub month_goals: Vec<Goal>,

    /// [`Goal`]s of the current day.
    pub today_goals: Vec<Goal>,

    /// Totals over all the [`Goal`]s.
    pub goal_stats: read::goal::Stats,

    /// Indicator whether the user should be offered to set up [`Goal`]s.
    pub needs_goal_setup: bool,
}

impl Dashboard {
    /// Loads the [`Dashboard`] via the provided [`Service`].
    ///
    /// Parts are loaded concurrently. A part failed to load is logged and
    /// left empty.
    pub async fn load(svc: &Service) -> Self {
        let (
            exercises,
            history,
            stats,
            month_goals,
            today_goals,
            goal_stats,
        ) = futures::join!(
            svc.execute(query::exercises::List::default()),
            svc.execute(query::user::History::default()),
            svc.execute(query::user::Stats::default()),
            svc.execute(ForMonth(Month::current())),
            svc.execute(query::goals::Today::default()),
            svc.execute(query::goals::Stats::default()),
        );
        let needs_goal_setup = goal_stats
            .as_ref()
            .is_ok_and(read::goal::Stats::needs_initial_setup);
        let goal_stats = or_default("goal stats", goal_stats);

        let session = svc
            .execute(CurrentSession)
            .await
            .unwrap_or_else(|e| match e {});
        let initials = session
            .as_ref()
            .map_or_else(|| "U".to_owned(), |s| s.profile.initials());

        Self {
            session,
            initials,
            exercises: or_default("exercises", exercises),
            recent_workouts: or_default("workout history", history).workouts,
            stats: or_default("workout stats", stats),
            month_goals: or_default("month goals", month_goals),
            today_goals: or_default("today goals", today_goals),
            goal_stats,
            needs_goal_setup,
        }
    }
}

/// Unwraps the loaded `res`ult, logging and replacing a failure with the
/// default value.
fn or_default<T: Default>(
    what: &str,
    res: Result<T, Traced<AuthorizedError>>,
) -> T {
    res.unwrap_or_else(|e| {
        log::warn!("Failed to load {what}: {e}");
        T::default()
    })
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use serde_json::json;
    use service::{
        command::SignIn,
        domain::session::{IdentityAssertion, ProviderAccessToken, Stage},
        infra::{http, Http},
        Command as _, Config,
    };
    use wiremock::{
        matchers::{bearer_token, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::Service;

    use super::Dashboard;

    async fn service(server: &MockServer) -> Service {
        let http = Http::new(&http::Config {
            url: server.uri().parse().unwrap(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let svc = Service::new(Config::default(), http);
        _ = svc
            .execute(SignIn {
                assertion: Some(IdentityAssertion::new("idtok-123")),
                provider_token: Some(ProviderAccessToken::new("ya29")),
                ..SignIn::default()
            })
            .await
            .unwrap_or_else(|e| match e {});
        svc
    }

    async fn mount_get(server: &MockServer, at: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .and(bearer_token("be-456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn loads_with_single_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/google"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "be-456",
                "token_type": "bearer",
                "user": { "user_id": "google_42", "name": "Ada Lovelace" },
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_get(
            &server,
            "/api/exercises/",
            json!([
                { "exercise_id": "e1", "name": "Push-ups", "type": "pushup" },
                { "exercise_id": "e2", "name": "Squats", "type": "squat" },
            ]),
        )
        .await;
        mount_get(&server, "/api/users/history", json!({ "sessions": [] }))
            .await;
        mount_get(&server, "/api/goals", json!([])).await;
        mount_get(&server, "/api/goals/today", json!([])).await;
        mount_get(
            &server,
            "/api/goals/stats/summary",
            json!({ "total_goals": 0, "completion_rate": 0.0 }),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/users/stats"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let svc = service(&server).await;
        let dashboard = Dashboard::load(&svc).await;

        let session = dashboard.session.unwrap();
        assert_eq!(session.stage, Stage::Exchanged);
        assert_eq!(session.user_id.unwrap().as_ref(), "google_42");
        assert_eq!(dashboard.initials, "AL");
        assert_eq!(dashboard.exercises.len(), 2);
        assert!(dashboard.recent_workouts.is_empty());
        assert_eq!(dashboard.stats, service::read::user::Stats::default());
        assert!(dashboard.needs_goal_setup);
    }

    #[tokio::test]
    async fn survives_unreachable_backend() {
        let server = MockServer::start().await;

        let svc = service(&server).await;
        let dashboard = Dashboard::load(&svc).await;

        let session = dashboard.session.unwrap();
        assert_eq!(session.stage, Stage::Fallback);
        assert!(dashboard.exercises.is_empty());
        assert!(dashboard.month_goals.is_empty());
        assert!(!dashboard.needs_goal_setup);
    }
}
