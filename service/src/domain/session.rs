//! [`Record`] of a signed-in session and its tokens.
//!
//! A [`Record`] moves through the following stages:
//! 1. [`Stage::Pending`]: the identity provider sign-in succeeded and its
//!    [`IdentityAssertion`] is held until the first bearer resolution;
//! 2. [`Stage::Exchanging`]: the [`IdentityAssertion`] is being exchanged
//!    for a [`BackendToken`];
//! 3. either [`Stage::Exchanged`], holding the [`BackendToken`], or
//!    [`Stage::Fallback`], using the [`ProviderAccessToken`] instead.
//!
//! Both final stages are stable: once a [`Bearer`] is available, it's never
//! replaced, except for a late [`BackendToken`] upgrading a
//! [`Stage::Fallback`].

use common::{unit, DateTimeOf};
use derive_more::{Debug, Display};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::user;

macro_rules! define_token {
    ($(#[doc = $doc:literal])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Clone, Debug)]
        pub struct $name(SecretString);

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`].")]
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(SecretString::from(token.into()))
            }
        }

        impl ExposeSecret<str> for $name {
            fn expose_secret(&self) -> &str {
                self.0.expose_secret()
            }
        }
    };
}

define_token! {
    /// Signed token issued by the identity provider, proving the user's
    /// identity.
    ///
    /// Sent nowhere but to the backend's exchange endpoint.
    IdentityAssertion
}

define_token! {
    /// Access token issued by the identity provider along with the
    /// [`IdentityAssertion`].
    ///
    /// Used as the [`Bearer`] when the backend exchange is unavailable.
    ProviderAccessToken
}

define_token! {
    /// Token issued by the backend in exchange for a valid
    /// [`IdentityAssertion`].
    BackendToken
}

/// Credential authorizing backend API calls.
#[derive(Clone, Debug)]
pub enum Bearer {
    /// [`BackendToken`] obtained via exchange.
    Backend(BackendToken),

    /// [`ProviderAccessToken`] used as a fallback.
    Provider(ProviderAccessToken),
}

impl Bearer {
    /// Returns the [`BearerKind`] of this [`Bearer`].
    #[must_use]
    pub fn kind(&self) -> BearerKind {
        match self {
            Self::Backend(_) => BearerKind::Backend,
            Self::Provider(_) => BearerKind::Provider,
        }
    }
}

impl ExposeSecret<str> for Bearer {
    fn expose_secret(&self) -> &str {
        match self {
            Self::Backend(t) => t.expose_secret(),
            Self::Provider(t) => t.expose_secret(),
        }
    }
}

/// Kind of a [`Bearer`], safe to display.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BearerKind {
    /// [`Bearer::Backend`].
    #[display("backend")]
    Backend,

    /// [`Bearer::Provider`].
    #[display("provider")]
    Provider,
}

/// Stage of the token exchange of a [`Record`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Signed in, the exchange is not requested yet.
    #[display("pending")]
    Pending,

    /// Exchange request is in flight.
    #[display("exchanging")]
    Exchanging,

    /// [`BackendToken`] is obtained.
    #[display("exchanged")]
    Exchanged,

    /// Exchange failed, the [`ProviderAccessToken`] is used.
    #[display("fallback")]
    Fallback,
}

/// State of the token exchange, carrying the tokens relevant to its
/// [`Stage`].
#[derive(Clone, Debug)]
enum Exchange {
    /// See [`Stage::Pending`].
    Pending(Option<IdentityAssertion>),

    /// See [`Stage::Exchanging`].
    Exchanging,

    /// See [`Stage::Exchanged`].
    Exchanged {
        /// Obtained [`BackendToken`].
        token: BackendToken,

        /// [`user::Id`] assigned by the backend.
        user_id: user::Id,
    },

    /// See [`Stage::Fallback`].
    Fallback,
}

/// Client-held record of a signed-in session.
#[derive(Clone, Debug)]
pub struct Record {
    /// [`user::Profile`] of the signed-in user.
    profile: user::Profile,

    /// [`DateTime`] when the user signed in.
    ///
    /// [`DateTime`]: common::DateTime
    signed_in_at: SignInDateTime,

    /// [`ProviderAccessToken`] captured at sign-in.
    provider_token: Option<ProviderAccessToken>,

    /// State of the token exchange.
    exchange: Exchange,
}

impl Record {
    /// Creates a new [`Stage::Pending`] [`Record`].
    #[must_use]
    pub fn new(
        profile: user::Profile,
        assertion: Option<IdentityAssertion>,
        provider_token: Option<ProviderAccessToken>,
    ) -> Self {
        Self {
            profile,
            signed_in_at: SignInDateTime::now(),
            provider_token,
            exchange: Exchange::Pending(assertion),
        }
    }

    /// Returns the [`user::Profile`] of this [`Record`].
    #[must_use]
    pub fn profile(&self) -> &user::Profile {
        &self.profile
    }

    /// Returns the [`user::Id`] assigned by the backend, if exchanged.
    #[must_use]
    pub fn user_id(&self) -> Option<&user::Id> {
        match &self.exchange {
            Exchange::Exchanged { user_id, .. } => Some(user_id),
            Exchange::Pending(_) | Exchange::Exchanging | Exchange::Fallback => {
                None
            }
        }
    }

    /// Returns the current [`Stage`] of this [`Record`].
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self.exchange {
            Exchange::Pending(_) => Stage::Pending,
            Exchange::Exchanging => Stage::Exchanging,
            Exchange::Exchanged { .. } => Stage::Exchanged,
            Exchange::Fallback => Stage::Fallback,
        }
    }

    /// Returns the [`Bearer`] of this [`Record`], if settled.
    ///
    /// [`None`] is returned before the exchange settles, or in
    /// [`Stage::Fallback`] without a [`ProviderAccessToken`].
    #[must_use]
    pub fn bearer(&self) -> Option<Bearer> {
        match &self.exchange {
            Exchange::Exchanged { token, .. } => {
                Some(Bearer::Backend(token.clone()))
            }
            Exchange::Fallback => {
                self.provider_token.clone().map(Bearer::Provider)
            }
            Exchange::Pending(_) | Exchange::Exchanging => None,
        }
    }

    /// Starts the exchange, moving this [`Record`] into
    /// [`Stage::Exchanging`] and handing out its [`IdentityAssertion`].
    ///
    /// [`None`] is returned if the exchange was already attempted, or there
    /// is no [`IdentityAssertion`] to exchange. In the latter case this
    /// [`Record`] falls back right away.
    pub fn begin_exchange(&mut self) -> Option<IdentityAssertion> {
        match &mut self.exchange {
            Exchange::Pending(assertion) => {
                let assertion = assertion.take();
                self.exchange = if assertion.is_some() {
                    Exchange::Exchanging
                } else {
                    Exchange::Fallback
                };
                assertion
            }
            Exchange::Exchanging
            | Exchange::Exchanged { .. }
            | Exchange::Fallback => None,
        }
    }

    /// Completes the exchange with the obtained [`BackendToken`].
    ///
    /// Overrides a [`Stage::Fallback`], but never a previous
    /// [`Stage::Exchanged`].
    pub fn complete_exchange(
        &mut self,
        token: BackendToken,
        user_id: user::Id,
        profile: user::Profile,
    ) {
        if matches!(self.exchange, Exchange::Exchanged { .. }) {
            return;
        }
        self.exchange = Exchange::Exchanged { token, user_id };
        self.profile.refresh(profile);
    }

    /// Falls back to the [`ProviderAccessToken`].
    ///
    /// No-op if a [`Bearer`] is already settled.
    pub fn fall_back(&mut self) {
        match self.exchange {
            Exchange::Pending(_) | Exchange::Exchanging => {
                self.exchange = Exchange::Fallback;
            }
            Exchange::Exchanged { .. } | Exchange::Fallback => {}
        }
    }

    /// Returns a [`Snapshot`] of this [`Record`], free of any secrets.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            profile: self.profile.clone(),
            stage: self.stage(),
            user_id: self.user_id().cloned(),
            signed_in_at: self.signed_in_at,
        }
    }
}

/// Secret-free view of a [`Record`].
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// [`user::Profile`] of the signed-in user.
    pub profile: user::Profile,

    /// [`Stage`] of the token exchange.
    pub stage: Stage,

    /// [`user::Id`] assigned by the backend, if exchanged.
    pub user_id: Option<user::Id>,

    /// [`DateTime`] when the user signed in.
    ///
    /// [`DateTime`]: common::DateTime
    pub signed_in_at: SignInDateTime,
}

/// [`DateTime`] when a [`Record`] was created.
///
/// [`DateTime`]: common::DateTime
pub type SignInDateTime = DateTimeOf<(Record, unit::Creation)>;

#[cfg(test)]
mod spec {
    use secrecy::ExposeSecret as _;

    use crate::domain::user;

    use super::{
        BackendToken, BearerKind, IdentityAssertion, ProviderAccessToken,
        Record, Stage,
    };

    fn record(assertion: Option<&str>, provider: Option<&str>) -> Record {
        Record::new(
            user::Profile::default(),
            assertion.map(IdentityAssertion::new),
            provider.map(ProviderAccessToken::new),
        )
    }

    #[test]
    fn pending_has_no_bearer() {
        let rec = record(Some("idtok-123"), Some("ya29"));
        assert_eq!(rec.stage(), Stage::Pending);
        assert!(rec.bearer().is_none());
        assert!(rec.user_id().is_none());
    }

    #[test]
    fn exchange_is_handed_out_once() {
        let mut rec = record(Some("idtok-123"), Some("ya29"));

        let assertion = rec.begin_exchange().unwrap();
        assert_eq!(assertion.expose_secret(), "idtok-123");
        assert_eq!(rec.stage(), Stage::Exchanging);

        assert!(rec.begin_exchange().is_none());
        rec.fall_back();
        assert!(rec.begin_exchange().is_none());
        assert_eq!(rec.stage(), Stage::Fallback);
    }

    #[test]
    fn exchanged_bearer_is_backend_token() {
        let mut rec = record(Some("idtok-123"), Some("ya29"));
        _ = rec.begin_exchange();
        rec.complete_exchange(
            BackendToken::new("be-456"),
            "u1".into(),
            user::Profile::default(),
        );

        let bearer = rec.bearer().unwrap();
        assert_eq!(bearer.kind(), BearerKind::Backend);
        assert_eq!(bearer.expose_secret(), "be-456");
        assert_eq!(rec.user_id().unwrap().as_ref(), "u1");
    }

    #[test]
    fn fallback_never_overwrites_exchanged() {
        let mut rec = record(Some("idtok-123"), Some("ya29"));
        _ = rec.begin_exchange();
        rec.complete_exchange(
            BackendToken::new("be-456"),
            "u1".into(),
            user::Profile::default(),
        );
        rec.fall_back();

        assert_eq!(rec.stage(), Stage::Exchanged);
        assert_eq!(rec.bearer().unwrap().expose_secret(), "be-456");
    }

    #[test]
    fn late_exchange_upgrades_fallback() {
        let mut rec = record(Some("idtok-123"), Some("ya29"));
        _ = rec.begin_exchange();
        rec.fall_back();
        assert_eq!(rec.bearer().unwrap().expose_secret(), "ya29");

        rec.complete_exchange(
            BackendToken::new("be-456"),
            "u1".into(),
            user::Profile::default(),
        );
        assert_eq!(rec.bearer().unwrap().expose_secret(), "be-456");

        rec.complete_exchange(
            BackendToken::new("be-789"),
            "u2".into(),
            user::Profile::default(),
        );
        assert_eq!(rec.bearer().unwrap().expose_secret(), "be-456");
        assert_eq!(rec.user_id().unwrap().as_ref(), "u1");
    }

    #[test]
    fn missing_assertion_falls_back() {
        let mut rec = record(None, Some("ya29"));
        assert!(rec.begin_exchange().is_none());
        assert_eq!(rec.stage(), Stage::Fallback);
        assert_eq!(rec.bearer().unwrap().kind(), BearerKind::Provider);
    }

    #[test]
    fn fallback_without_provider_token_has_no_bearer() {
        let mut rec = record(Some("idtok-123"), None);
        _ = rec.begin_exchange();
        rec.fall_back();
        assert_eq!(rec.stage(), Stage::Fallback);
        assert!(rec.bearer().is_none());
    }

    #[test]
    fn debug_hides_tokens() {
        let mut rec = record(Some("idtok-123"), Some("ya29"));
        assert!(!format!("{rec:?}").contains("idtok-123"));
        _ = rec.begin_exchange();
        rec.complete_exchange(
            BackendToken::new("be-456"),
            "u1".into(),
            user::Profile::default(),
        );
        let debug = format!("{rec:?}");
        assert!(!debug.contains("be-456"));
        assert!(!debug.contains("ya29"));
    }
}
