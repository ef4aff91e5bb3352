//! Grid geometry and floating-panel configuration types.

use serde::{Deserialize, Serialize};

/// Grid geometry shared by every tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Outer margin around the grid in pixels (valid range: 0-64).
    pub margin: u32,
    /// Seam width between tiles in pixels (valid range: 0-32).
    pub gap: u32,
    /// Minimum tile width in grid columns (valid range: 1-12).
    pub min_w: u32,
    /// Minimum tile height in grid rows (valid range: 1-12).
    pub min_h: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin: 8,
            gap: 6,
            min_w: 2,
            min_h: 2,
        }
    }
}

/// Size of a panel when it first opens floating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Width in pixels (valid range: 120-4096).
    pub width: u32,
    /// Height in pixels (valid range: 120-4096).
    pub height: u32,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 360,
        }
    }
}
