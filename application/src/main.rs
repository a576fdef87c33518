use std::{io, str::FromStr as _, sync::OnceLock};

use application::{render, Args, Config};
use common::DateTime;
use service::{
    domain::promotion::Category, infra::Json, query::SelectPromotions,
    Query as _, Service,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
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

    if start().is_err() {
        std::process::exit(1);
    }
}

fn start() -> Result<(), ()> {
    let Args { config, category } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        catalog,
        promotions,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let category = Category::from_str(&category).map_err(|e| {
        log::error!("`{category}` is not a valid category: {e}");
    })?;

    let service = Service::new(promotions.into(), Json::new(catalog.path));

    let selection = service
        .execute(SelectPromotions {
            category,
            now: DateTime::now() + promotions.clock_skew,
        })
        .map_err(|e| log::error!("failed to select promotions: {e}"))?;

    print!("{}", render::selection(&selection));
    Ok(())
}
