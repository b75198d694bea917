use std::{io, process::ExitCode, sync::OnceLock};

use fitdetect::{
    args::Command, sign_in, Args, Config, Dashboard, Service,
};
use secrecy::ExposeSecret as _;
use service::{
    command::ResolveBearerToken, domain::avatar, infra::Http, query, Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        log_level,
        session,
        command,
    } = Args::parse().map_err(|e| {
        if e.use_stderr() {
            log::error!("failed to parse command line arguments: {e}");
        } else {
            // `--help` or `--version`.
            drop(e.print());
        }
    })?;

    let Config {
        api,
        auth,
        session: configured_session,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log_level.unwrap_or(log.level).into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let http_config = api.try_into().map_err(|e| {
        log::error!("invalid backend URL: {e}");
    })?;
    let http = Http::new(&http_config).map_err(|e| {
        log::error!("failed to initialize `Http` client: {e}");
    })?;

    let service = Service::new(auth.into(), http);

    let profile = service
        .execute(sign_in(configured_session, session))
        .await
        .unwrap_or_else(|e| match e {});
    log::info!("signed in as `{}`", profile.initials());

    run(&service, command).await
}

/// Runs the provided [`Command`] on behalf of the signed-in user.
async fn run(service: &Service, command: Command) -> Result<(), ()> {
    match command {
        Command::Token { reveal } => {
            let bearer =
                service.execute(ResolveBearerToken).await.map_err(|e| {
                    log::error!("failed to resolve bearer token: {e}");
                })?;
            println!("{}", bearer.kind());
            if reveal {
                println!("{}", bearer.expose_secret());
            }
        }
        Command::Dashboard => {
            let dashboard = Dashboard::load(service).await;
            let json =
                serde_json::to_string_pretty(&dashboard).map_err(|e| {
                    log::error!("failed to serialize `Dashboard`: {e}");
                })?;
            println!("{json}");
        }
        Command::Avatars => {
            let avatars = service
                .execute(query::avatars::List::default())
                .await
                .map_err(|e| {
                    log::error!("failed to list avatars: {e}");
                })?;
            for a in avatars {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    a.id,
                    a.name,
                    a.gender,
                    a.category,
                    avatar::preview_url(&a.id, 200),
                );
            }
        }
    }
    Ok(())
}
