//! Mosaic configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mosaic_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("gap = {}px", config.grid.gap);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MosaicConfig, CONFIG_SCHEMA_VERSION};

use mosaic_common::ConfigError;
use std::path::{Path, PathBuf};

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

impl MosaicConfig {
    /// The layout state file: `[storage] state_file` if set, otherwise the
    /// platform data directory.
    pub fn state_path(&self) -> Result<PathBuf, ConfigError> {
        if self.storage.state_file.is_empty() {
            toml_loader::default_state_path()
        } else {
            Ok(PathBuf::from(&self.storage.state_file))
        }
    }
}
