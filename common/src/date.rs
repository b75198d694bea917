//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// `YYYY-MM-DD` representation of a [`Date`].
const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date, serialized as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Returns the current UTC [`Date`].
    #[must_use]
    pub fn today() -> Self {
        Self(time::OffsetDateTime::now_utc().date())
    }

    /// Creates a new [`Date`] out of its components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the [`Month`] this [`Date`] belongs to.
    #[must_use]
    pub fn month(self) -> Month {
        Month {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(DATE_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, DATE_FORMAT)
            .map(Self)
            .map_err(ParseError::Date)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(de)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Calendar month of a specific year, serialized as `YYYY-MM`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Month {
    /// Year of this [`Month`].
    year: i32,

    /// Month of the year.
    month: time::Month,
}

impl Month {
    /// Returns the [`Month`] of the current UTC date.
    #[must_use]
    pub fn current() -> Self {
        Date::today().month()
    }

    /// Returns the first [`Date`] of this [`Month`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn first_day(self) -> Date {
        Date(
            time::Date::from_calendar_date(self.year, self.month, 1)
                .expect("first day of a month always exists"),
        )
    }

    /// Returns the last [`Date`] of this [`Month`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn last_day(self) -> Date {
        let days = self.month.length(self.year);
        Date(
            time::Date::from_calendar_date(self.year, self.month, days)
                .expect("last day of a month always exists"),
        )
    }

    /// Checks whether the provided [`Date`] lies within this [`Month`].
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.month() == self
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or(ParseError::Month)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(ParseError::Month);
        }
        let year = year.parse().map_err(|_| ParseError::Month)?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .ok_or(ParseError::Month)?;
        Ok(Self { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(de)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Error of parsing a [`Date`] or a [`Month`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input is not a `YYYY-MM-DD` date.
    #[display("invalid `YYYY-MM-DD` date: {_0}")]
    Date(time::error::Parse),

    /// Input is not a `YYYY-MM` month.
    #[display("invalid `YYYY-MM` month")]
    Month,
}
