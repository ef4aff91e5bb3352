//! Grid, floating and viewport validation.

use crate::schema::MosaicConfig;

use super::helpers::validate_range;

/// Accepted viewport size in pixels, per dimension.
pub const VIEWPORT_MIN: u32 = 200;
pub const VIEWPORT_MAX: u32 = 16384;

/// Validate grid geometry.
pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &MosaicConfig) {
    let grid = &config.grid;
    validate_range(errors, "grid.margin", grid.margin, 0, 64);
    validate_range(errors, "grid.gap", grid.gap, 0, 32);
    validate_range(errors, "grid.min_w", grid.min_w, 1, 12);
    validate_range(errors, "grid.min_h", grid.min_h, 1, 12);
}

pub(crate) fn validate_floating(errors: &mut Vec<String>, config: &MosaicConfig) {
    validate_range(errors, "floating.width", config.floating.width, 120, 4096);
    validate_range(errors, "floating.height", config.floating.height, 120, 4096);
}

pub(crate) fn validate_viewport(errors: &mut Vec<String>, config: &MosaicConfig) {
    let viewport = &config.viewport;
    validate_range(errors, "viewport.width", viewport.width, VIEWPORT_MIN, VIEWPORT_MAX);
    validate_range(errors, "viewport.height", viewport.height, VIEWPORT_MIN, VIEWPORT_MAX);
}
