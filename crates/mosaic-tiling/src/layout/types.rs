//! Layout engine types and configuration.

use crate::grid::Axis;

/// Grid columns and rows of the dashboard mosaic.
pub const GRID_COLS: u32 = 24;
pub const GRID_ROWS: u32 = 24;

/// Parameters of the grid <-> pixel projection.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Number of grid columns.
    pub cols: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Outer margin in pixels around the whole grid.
    pub margin: f64,
    /// Pixels trimmed from each tile's width and height to draw seams.
    pub gap: f64,
    /// Minimum tile width in grid columns.
    pub min_w: u32,
    /// Minimum tile height in grid rows.
    pub min_h: u32,
    /// Width of a freshly floated tile in pixels.
    pub float_width: f64,
    /// Height of a freshly floated tile in pixels.
    pub float_height: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            margin: 8.0,
            gap: 6.0,
            min_w: 2,
            min_h: 2,
            float_width: 480.0,
            float_height: 360.0,
        }
    }
}

impl LayoutEngine {
    /// Minimum tile extent along `axis`, in grid units.
    pub fn min_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => f64::from(self.min_w),
            Axis::Y => f64::from(self.min_h),
        }
    }

    /// Grid extent along `axis`, in grid units.
    pub fn grid_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => f64::from(self.cols),
            Axis::Y => f64::from(self.rows),
        }
    }
}

/// Pixel size of one grid cell for the current viewport.
///
/// Never stored on tiles; recomputed whenever the viewport changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub col_width: f64,
    pub row_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl GridMetrics {
    /// Both cell dimensions are positive, so pixel -> grid conversion is defined.
    pub fn is_valid(&self) -> bool {
        self.col_width > 0.0 && self.row_height > 0.0
    }

    pub fn cell(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.col_width,
            Axis::Y => self.row_height,
        }
    }
}
