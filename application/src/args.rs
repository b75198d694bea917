//! [`Args`] definitions.

use clap::{Parser, Subcommand};

use crate::config::LogLevel;

/// Command line client of the FitDetect backend.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Log level, overriding the configured one.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Identity provider sign-in result, overriding the configured one.
    #[command(flatten)]
    pub session: Session,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Identity provider sign-in result.
#[derive(Debug, Default, clap::Args)]
pub struct Session {
    /// Identity assertion (ID token) issued by the identity provider.
    #[arg(long)]
    pub id_token: Option<String>,

    /// Access token issued by the identity provider.
    #[arg(long)]
    pub access_token: Option<String>,

    /// Display name of the user.
    #[arg(long)]
    pub name: Option<String>,

    /// Email of the user.
    #[arg(long)]
    pub email: Option<String>,

    /// Picture URL of the user.
    #[arg(long)]
    pub picture: Option<String>,
}

/// Command to run once signed in.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum Command {
    /// Resolves the bearer token authorizing backend calls.
    Token {
        /// Prints the token itself, not only its kind.
        #[arg(long)]
        reveal: bool,
    },

    /// Prints the dashboard of the signed-in user as JSON.
    Dashboard,

    /// Lists the avatars available for selection.
    Avatars,
}
