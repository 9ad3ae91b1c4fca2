#![windows_subsystem = "windows"]

use anyhow::Context;
use flexiforms::domain::config::{AppConfig, LoggingConfig};
use flexiforms::kernel::config::load_config;
use flexiforms::pricing::App;
use flexiforms_desktop::DesktopApp;
use flexiforms_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _logger = init_logger(&cfg.logging)?;

    tracing::info!(features = ?flexiforms::features::ENABLED, "Starting FlexiForms desktop");

    DesktopApp::from_config(&cfg.window).launch(App);

    Ok(())
}

fn init_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter = logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(logging.console).level(level);
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter);
    }
    if let Some(directory) = &logging.directory {
        builder = builder.path(directory).json(logging.json);
    }

    builder.init().context("Failed to initialize logging")
}
