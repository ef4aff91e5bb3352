//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod grid;
mod helpers;

#[cfg(test)]
mod tests;

pub use grid::{VIEWPORT_MAX, VIEWPORT_MIN};

use crate::schema::MosaicConfig;
use mosaic_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MosaicConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    grid::validate_grid(&mut errors, config);
    grid::validate_floating(&mut errors, config);
    grid::validate_viewport(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
