use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::time, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber.
///
/// The terminal belongs to the game while it runs, so events go to `path`
/// (truncated on start). `RUST_LOG` overrides the default `info` level.
pub fn init(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_timer(time::uptime())
                .with_writer(Mutex::new(file)),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env()?
                .add_directive("mio=warn".parse()?),
        )
        .try_init()
        .context("tracing subscriber already installed")?;
    Ok(())
}
