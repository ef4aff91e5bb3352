mod cli;
mod script;
mod session;
mod store;

use std::process::ExitCode;

use mosaic_config::MosaicConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can apply; report failures after.
    let loaded = match &args.config {
        Some(path) => mosaic_config::load_config_from(path),
        None => mosaic_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (MosaicConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("mosaic={}", config.logging.level));
    let directive: Directive = log_directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log level `{log_directive}`: {e}");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::debug!("Mosaic v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match session::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
