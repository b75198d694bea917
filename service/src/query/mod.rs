//! [`Query`] definition.

pub mod avatars;
pub mod exercises;
pub mod goals;
pub mod session;
pub mod user;

use common::operations::{By, Perform, Select};
use tracerr::Traced;

use crate::{
    infra::{
        api::{self, Authorized, ExchangeAssertion, Exchanged},
        Api,
    },
    AuthorizedError, Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from the backend [`Api`] on behalf of the
/// signed-in user.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct ApiQuery<T>(T);

impl<W, B> ApiQuery<By<W, B>> {
    /// Creates a new [`ApiQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<W, B: Default> Default for ApiQuery<By<W, B>> {
    fn default() -> Self {
        Self::by(B::default())
    }
}

impl<A, W, B> Query<ApiQuery<By<W, B>>> for Service<A>
where
    A: Api<Perform<ExchangeAssertion>, Ok = Exchanged, Err = Traced<api::Error>>
        + Api<Authorized<Select<By<W, B>>>, Ok = W, Err = Traced<api::Error>>,
{
    type Ok = W;
    type Err = Traced<AuthorizedError>;

    async fn execute(
        &self,
        ApiQuery(by): ApiQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.authorized(Select(by)).await.map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use std::{sync::Arc, time::Duration};

    use tokio::time;

    use crate::{
        command::{ResolveBearerToken, SignIn},
        domain::session::{IdentityAssertion, ProviderAccessToken, Stage},
        infra::api::mock::{Mock, Outcome},
        Config, Query as _, Service,
    };

    use super::exercises;

    async fn signed_in(mock: Mock) -> (Service<Arc<Mock>>, Arc<Mock>) {
        let mock = Arc::new(mock);
        let svc = Service::new(Config::default(), Arc::clone(&mock));
        _ = svc
            .execute(SignIn {
                assertion: Some(IdentityAssertion::new("idtok-123")),
                provider_token: Some(ProviderAccessToken::new("ya29")),
                ..SignIn::default()
            })
            .await
            .unwrap();
        (svc, mock)
    }

    #[tokio::test]
    async fn sends_resolved_bearer() {
        let (svc, mock) =
            signed_in(Mock::exchanging(Outcome::Token("be-456"))).await;

        _ = svc.execute(exercises::List::default()).await.unwrap();
        _ = svc.execute(exercises::List::default()).await.unwrap();

        assert_eq!(
            mock.requests(),
            ["list_exercises be-456", "list_exercises be-456"],
        );
        assert_eq!(mock.exchanges(), 1);
    }

    #[tokio::test]
    async fn sends_fallback_bearer() {
        let (svc, mock) =
            signed_in(Mock::exchanging(Outcome::Status(500))).await;

        _ = svc.execute(exercises::List::default()).await.unwrap();

        assert_eq!(mock.requests(), ["list_exercises ya29"]);
    }

    #[tokio::test]
    async fn rejected_bearer_destroys_session() {
        let (svc, mock) = signed_in(
            Mock::exchanging(Outcome::Token("be-456")).rejecting(),
        )
        .await;

        let err = svc.execute(exercises::List::default()).await.unwrap_err();
        assert!(err.as_ref().is_unauthenticated());
        assert!(svc.store().snapshot().await.is_none());

        let err = svc.execute(exercises::List::default()).await.unwrap_err();
        assert!(err.as_ref().is_unauthenticated());
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn rejected_fallback_bearer_keeps_session() {
        let (svc, mock) =
            signed_in(Mock::exchanging(Outcome::Status(500)).rejecting()).await;

        let err = svc.execute(exercises::List::default()).await.unwrap_err();
        assert!(err.as_ref().is_unauthenticated());
        assert_eq!(
            svc.store().snapshot().await.unwrap().stage,
            Stage::Fallback,
        );

        _ = svc.execute(ResolveBearerToken).await.unwrap();
        _ = svc.execute(exercises::List::default()).await.unwrap_err();
        assert_eq!(
            mock.requests(),
            ["list_exercises ya29", "list_exercises ya29"],
        );
        assert_eq!(mock.exchanges(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_rejection_keeps_newer_session() {
        let (svc, mock) = signed_in(
            Mock::exchanging(Outcome::Token("be-456"))
                .rejecting()
                .responding_after(Duration::from_millis(300)),
        )
        .await;

        let (listed, signed_in) = futures::join!(
            svc.execute(exercises::List::default()),
            async {
                time::sleep(Duration::from_millis(100)).await;
                svc.execute(SignIn {
                    assertion: Some(IdentityAssertion::new("idtok-new")),
                    ..SignIn::default()
                })
                .await
            },
        );
        _ = signed_in.unwrap();

        assert!(listed.unwrap_err().as_ref().is_unauthenticated());
        assert_eq!(
            svc.store().snapshot().await.unwrap().stage,
            Stage::Pending,
        );

        _ = svc.execute(ResolveBearerToken).await.unwrap();
        assert_eq!(mock.exchanged_assertions(), ["idtok-123", "idtok-new"]);
    }

    #[tokio::test]
    async fn fails_when_signed_out() {
        let mock = Arc::new(Mock::exchanging(Outcome::Token("be-456")));
        let svc = Service::new(Config::default(), Arc::clone(&mock));

        let err = svc.execute(exercises::List::default()).await.unwrap_err();
        assert!(err.as_ref().is_unauthenticated());
        assert!(mock.requests().is_empty());
        assert_eq!(mock.exchanges(), 0);
    }
}
