//! Configuration schema types for Mosaic.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod grid;
mod system;
mod viewport;

pub use grid::*;
pub use system::*;
pub use viewport::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Mosaic.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub grid: GridConfig,
    pub floating: FloatingConfig,
    pub viewport: ViewportConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
