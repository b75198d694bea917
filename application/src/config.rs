//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API configuration.
    pub api: Api,

    /// Authentication configuration.
    pub auth: Auth,

    /// Identity provider sign-in result to start the session with.
    pub session: Session,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Backend API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the backend.
    #[default("http://localhost:8000".to_owned())]
    pub url: String,

    /// Timeout of a single request to the backend.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl TryFrom<Api> for service::infra::http::Config {
    type Error = url::ParseError;

    fn try_from(value: Api) -> Result<Self, Self::Error> {
        let Api { url, timeout } = value;
        Ok(Self {
            url: url.parse()?,
            timeout,
        })
    }
}

/// Authentication configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Auth {
    /// Maximum time to wait for the identity assertion exchange before
    /// falling back to the provider access token.
    #[default(time::Duration::from_secs(3))]
    #[serde(with = "humantime_serde")]
    pub exchange_timeout: time::Duration,
}

impl From<Auth> for service::Config {
    fn from(value: Auth) -> Self {
        let Auth { exchange_timeout } = value;
        Self { exchange_timeout }
    }
}

/// Identity provider sign-in result.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Identity assertion (ID token) issued by the identity provider.
    #[serde(deserialize_with = "secret")]
    pub id_token: Option<SecretString>,

    /// Access token issued by the identity provider.
    #[serde(deserialize_with = "secret")]
    pub access_token: Option<SecretString>,

    /// Display name of the user.
    pub name: Option<String>,

    /// Email of the user.
    pub email: Option<String>,

    /// Picture URL of the user.
    pub picture: Option<String>,
}

/// Deserializes an optional [`SecretString`].
fn secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
