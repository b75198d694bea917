//! Signed-in user definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier of a user, assigned by the backend once the
/// [`IdentityAssertion`] has been exchanged.
///
/// [`IdentityAssertion`]: crate::domain::session::IdentityAssertion
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Display name of a user.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty() && name.len() <= 512).then(|| Self(name.to_owned()))
    }

    /// Returns the initials of this [`Name`]: the first letters of its first
    /// and last words, or the first letter only for a single word.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut words = self.0.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.next_back().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a user.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format: a single `@`
        /// separating non-empty parts, with a dot in the domain part.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Identity of a signed-in user, as known to this client.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Profile {
    /// [`Name`] of the user.
    pub name: Option<Name>,

    /// [`Email`] of the user.
    pub email: Option<Email>,

    /// URL of the user's picture.
    pub picture: Option<String>,
}

impl Profile {
    /// Creates a new [`Profile`] out of raw values, dropping the invalid ones.
    #[must_use]
    pub fn from_raw(
        name: Option<&str>,
        email: Option<&str>,
        picture: Option<&str>,
    ) -> Self {
        Self {
            name: name.and_then(Name::new),
            email: email.and_then(Email::new),
            picture: picture
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToOwned::to_owned),
        }
    }

    /// Fills the missing fields of this [`Profile`] from the `other` one,
    /// preferring the `other` values where both are present.
    pub fn refresh(&mut self, other: Self) {
        let Self {
            name,
            email,
            picture,
        } = other;
        self.name = name.or(self.name.take());
        self.email = email.or(self.email.take());
        self.picture = picture.or(self.picture.take());
    }

    /// Checks whether this [`Profile`] carries no information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.picture.is_none()
    }

    /// Returns the initials to display when no picture is available.
    ///
    /// `U` is returned for an anonymous user.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .as_ref()
            .map(Name::initials)
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| "U".to_owned())
    }
}
