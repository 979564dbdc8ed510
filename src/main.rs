mod demo;     // built-in event feed
mod replay;   // fixed-step playback loop
mod settings; // configuration loading

use ackermann_events::EventLog;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Ackermann replay started.");

    let settings = settings::load_config().context("failed to load configuration")?;
    let geometry = settings.geometry().context("invalid vehicle geometry")?;

    // Ordering is checked once here; an unsorted feed is fatal.
    let log = EventLog::new(demo::events()).context("event feed failed validation")?;
    if let Some((first, last)) = log.span() {
        info!(events = log.len(), first, last, "Event feed loaded");
    }

    let summary = replay::run(&log, geometry, &settings.playback, &settings.vehicle);
    info!(frames = summary.frames, skipped = summary.skipped, "Playback finished.");

    Ok(())
}
