//! Proximity display service

use anyhow::Context;
use log::info;
use svc_proximity::distance::format_distance;
use svc_proximity::scene::LogSurface;
use svc_proximity::*;
use tokio_util::sync::CancellationToken;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    // Will use default config settings if no environment vars are found.
    let config =
        Config::try_from_env().context("Failed to load configuration from environment")?;

    info!("(main) Loading config.");

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()).await {
        log::error!("(main) {}", e);
    }

    let settings = config.screen_settings()?;
    let provider = config.location_provider()?;
    let screen = ProximityScreen::new(settings, provider, LogSurface::new())?;

    info!("(main) Screen startup.");

    let shutdown = CancellationToken::new();
    let screen_task = tokio::spawn(screen.run(shutdown.clone()));

    shutdown_signal("proximity screen", None).await;
    shutdown.cancel();

    let state = screen_task.await.context("Screen task failed")?;
    match state.distance {
        Some(reading) => info!(
            "(main) last distance to truck: {}.",
            format_distance(reading.meters)
        ),
        None => info!("(main) no distance computed this session."),
    }

    info!("(main) Screen shutdown.");

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
