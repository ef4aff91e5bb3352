//! Grid-space rectangle and the axis helpers shared by every resolver.

use serde::{Deserialize, Serialize};

/// Tolerance for every grid-coordinate comparison, in grid units.
pub const EPSILON: f64 = 0.1;

/// Compare two grid coordinates within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Whether the open spans `[a_start, a_start + a_size)` and
/// `[b_start, b_start + b_size)` share any length.
pub fn spans_overlap(a_start: f64, a_size: f64, b_start: f64, b_size: f64) -> bool {
    a_start.max(b_start) < (a_start + a_size).min(b_start + b_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Columns (`gx`, `gw`).
    X,
    /// Rows (`gy`, `gh`).
    Y,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// A tile's slot on the grid, in whole grid cells.
///
/// Stored as `f64` because rectangles persisted by older dashboards may carry
/// fractional values; comparisons always go through [`approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridRect {
    pub gx: f64,
    pub gy: f64,
    pub gw: f64,
    pub gh: f64,
}

impl GridRect {
    pub fn new(gx: f64, gy: f64, gw: f64, gh: f64) -> Self {
        Self { gx, gy, gw, gh }
    }

    pub fn right(&self) -> f64 {
        self.gx + self.gw
    }

    pub fn bottom(&self) -> f64 {
        self.gy + self.gh
    }

    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.gx,
            Axis::Y => self.gy,
        }
    }

    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.gw,
            Axis::Y => self.gh,
        }
    }

    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.size(axis)
    }

    pub fn start_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.gx,
            Axis::Y => &mut self.gy,
        }
    }

    pub fn size_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.gw,
            Axis::Y => &mut self.gh,
        }
    }

    /// Whether the two rectangles share any span on `axis`.
    pub fn overlaps_on(&self, other: &GridRect, axis: Axis) -> bool {
        spans_overlap(
            self.start(axis),
            self.size(axis),
            other.start(axis),
            other.size(axis),
        )
    }

    pub fn approx_eq(&self, other: &GridRect) -> bool {
        approx_eq(self.gx, other.gx)
            && approx_eq(self.gy, other.gy)
            && approx_eq(self.gw, other.gw)
            && approx_eq(self.gh, other.gh)
    }
}
