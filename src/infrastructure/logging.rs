//! Tracing subscriber setup shared by the binaries.

use crate::infrastructure::log_channel::ChannelWriterFactory;
use crossbeam_channel::Receiver;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// How many formatted lines the window log may hold before lines are dropped.
const UI_LOG_CAPACITY: usize = 1024;

/// Stdout + window logging for the desktop calculator. `RUST_LOG` wins over the INFO default.
pub fn init_ui_logging() -> Receiver<String> {
    let (factory, log_rx) = ChannelWriterFactory::bounded(UI_LOG_CAPACITY);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(factory)
        .with_ansi(false) // No color codes for UI text
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    log_rx
}

/// Stderr logging for the headless command, so stdout carries only the report.
pub fn init_cli_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
