//! Reclaiming the space a closed tile leaves behind.

use mosaic_common::types::TileId;
use serde::{Deserialize, Serialize};

use crate::grid::{approx_eq, Axis, GridRect, EPSILON};
use crate::tile::Tile;

/// A side of the closed tile from which neighbours may absorb its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Left,
    Bottom,
    Top,
}

impl Side {
    /// Order in which sides are tried; the first full cover wins.
    pub const PRIORITY: [Side; 4] = [Side::Right, Side::Left, Side::Bottom, Side::Top];

    /// Axis along which absorbing neighbours grow.
    pub fn axis(self) -> Axis {
        match self {
            Side::Right | Side::Left => Axis::X,
            Side::Bottom | Side::Top => Axis::Y,
        }
    }

    /// Neighbours on the right/bottom must also pull their origin back.
    fn is_trailing(self) -> bool {
        matches!(self, Side::Right | Side::Bottom)
    }

    /// Whether `rect` sits flush against this side of `gap`.
    fn is_flush(self, rect: &GridRect, gap: &GridRect) -> bool {
        let axis = self.axis();
        if self.is_trailing() {
            approx_eq(rect.start(axis), gap.end(axis))
        } else {
            approx_eq(rect.end(axis), gap.start(axis))
        }
    }
}

/// Result of a gap-fill: the new tile list, and which side absorbed the gap.
#[derive(Debug, Clone, PartialEq)]
pub struct GapFill {
    pub tiles: Vec<Tile>,
    /// `None` when no side fully covered the gap; the gap stays open.
    pub side: Option<Side>,
}

/// Close `closed_id` and let flush neighbours absorb its rectangle.
///
/// A floating tile owns no grid territory, so only its open flag changes.
/// Otherwise the sides are tried in [`Side::PRIORITY`] order and the first
/// side whose neighbours exactly cover the closed tile's span grows into it.
pub fn fill_gap(closed_id: &TileId, tiles: &[Tile]) -> GapFill {
    let mut next = tiles.to_vec();
    let Some(closed) = tiles.iter().find(|t| &t.id == closed_id) else {
        return GapFill {
            tiles: next,
            side: None,
        };
    };

    for tile in next.iter_mut().filter(|t| &t.id == closed_id) {
        tile.is_open = false;
    }
    if closed.is_floating {
        return GapFill {
            tiles: next,
            side: None,
        };
    }

    let gap = closed.grid;
    for side in Side::PRIORITY {
        let cross = side.axis().cross();
        let neighbours: Vec<usize> = next
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                t.is_tiled()
                    && side.is_flush(&t.grid, &gap)
                    && t.grid.start(cross) >= gap.start(cross) - EPSILON
                    && t.grid.end(cross) <= gap.end(cross) + EPSILON
            })
            .map(|(i, _)| i)
            .collect();

        let rects: Vec<GridRect> = neighbours.iter().map(|&i| next[i].grid).collect();
        if !covers_span(&rects, gap.start(cross), gap.end(cross), cross) {
            continue;
        }

        let axis = side.axis();
        for i in neighbours {
            let grid = &mut next[i].grid;
            *grid.size_mut(axis) += gap.size(axis);
            if side.is_trailing() {
                *grid.start_mut(axis) = gap.start(axis);
            }
        }
        return GapFill {
            tiles: next,
            side: Some(side),
        };
    }

    GapFill {
        tiles: next,
        side: None,
    }
}

/// Whether `rects`, laid end to end on `axis`, cover exactly `[start, end)`.
fn covers_span(rects: &[GridRect], start: f64, end: f64, axis: Axis) -> bool {
    let mut sorted = rects.to_vec();
    sorted.sort_by(|a, b| a.start(axis).total_cmp(&b.start(axis)));

    let Some(first) = sorted.first() else {
        return false;
    };
    if !approx_eq(first.start(axis), start) {
        return false;
    }

    let mut reached = first.end(axis);
    for rect in &sorted[1..] {
        if !approx_eq(rect.start(axis), reached) {
            return false;
        }
        reached += rect.size(axis);
    }
    approx_eq(reached, end)
}
