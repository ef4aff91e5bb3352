//! Layout calculation: grid <-> pixel projection.

use mosaic_common::types::Rect;

use crate::grid::GridRect;
use crate::tile::Tile;

use super::{GridMetrics, LayoutEngine};

impl LayoutEngine {
    /// Cell metrics for a viewport of `width` x `height` pixels.
    pub fn metrics(&self, width: f64, height: f64) -> GridMetrics {
        GridMetrics {
            col_width: (width - self.margin * 2.0) / f64::from(self.cols),
            row_height: (height - self.margin * 2.0) / f64::from(self.rows),
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Recompute every tiled record's pixel rect from its grid rect.
    /// Floating tiles pass through untouched.
    pub fn project(&self, tiles: &[Tile], metrics: &GridMetrics) -> Vec<Tile> {
        tiles
            .iter()
            .map(|tile| {
                let mut tile = tile.clone();
                if !tile.is_floating {
                    tile.rect = self.grid_to_pixels(&tile.grid, metrics);
                }
                tile
            })
            .collect()
    }

    pub fn grid_to_pixels(&self, grid: &GridRect, metrics: &GridMetrics) -> Rect {
        Rect {
            x: grid.gx * metrics.col_width + self.margin,
            y: grid.gy * metrics.row_height + self.margin,
            width: (grid.gw * metrics.col_width - self.gap).max(0.0),
            height: (grid.gh * metrics.row_height - self.gap).max(0.0),
        }
    }

    /// Snap a dragged pixel rect back onto the grid: rounded to whole cells,
    /// clamped inside the grid and no smaller than the minimum tile size.
    pub fn to_grid(&self, rect: &Rect, metrics: &GridMetrics) -> GridRect {
        let cols = f64::from(self.cols);
        let rows = f64::from(self.rows);
        let min_w = f64::from(self.min_w);
        let min_h = f64::from(self.min_h);

        let gx = ((rect.x - self.margin) / metrics.col_width)
            .round()
            .clamp(0.0, (cols - min_w).max(0.0));
        let gy = ((rect.y - self.margin) / metrics.row_height)
            .round()
            .clamp(0.0, (rows - min_h).max(0.0));
        let gw = ((rect.width + self.gap) / metrics.col_width)
            .round()
            .max(min_w)
            .min(cols - gx);
        let gh = ((rect.height + self.gap) / metrics.row_height)
            .round()
            .max(min_h)
            .min(rows - gy);

        GridRect { gx, gy, gw, gh }
    }

    /// The whole grid as a single rectangle.
    pub fn full_grid(&self) -> GridRect {
        GridRect::new(0.0, 0.0, f64::from(self.cols), f64::from(self.rows))
    }

    /// Default floating rect, centered in the viewport.
    pub fn centered_float(&self, metrics: &GridMetrics) -> Rect {
        Rect {
            x: (metrics.viewport_width - self.float_width) / 2.0,
            y: (metrics.viewport_height - self.float_height) / 2.0,
            width: self.float_width,
            height: self.float_height,
        }
    }
}
