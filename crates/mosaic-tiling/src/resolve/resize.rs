//! Seam-based resize: dragging one edge moves every tile sharing that seam.

use mosaic_common::types::{Rect, TileId};
use tracing::debug;

use crate::grid::{approx_eq, Axis, GridRect, EPSILON};
use crate::layout::{GridMetrics, LayoutEngine};
use crate::tile::Tile;

/// A seam being dragged along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamShift {
    pub axis: Axis,
    /// Grid coordinate of the seam line.
    pub seam: f64,
    /// Requested move, positive toward higher coordinates.
    pub shift: f64,
    /// The dragged tile sits before the seam (its trailing edge is the seam).
    pub dragged_leads: bool,
}

impl SeamShift {
    /// Which seam `current` moved to become `candidate` on `axis`, if any.
    ///
    /// An origin change means the leading edge was dragged; otherwise a size
    /// change means the trailing edge was.
    pub fn detect(current: &GridRect, candidate: &GridRect, axis: Axis) -> Option<SeamShift> {
        let d_start = candidate.start(axis) - current.start(axis);
        let d_size = candidate.size(axis) - current.size(axis);
        if d_start.abs() >= EPSILON {
            Some(SeamShift {
                axis,
                seam: current.start(axis),
                shift: d_start,
                dragged_leads: false,
            })
        } else if d_size.abs() >= EPSILON {
            Some(SeamShift {
                axis,
                seam: current.end(axis),
                shift: d_size,
                dragged_leads: true,
            })
        } else {
            None
        }
    }
}

/// Resize `id` toward the dragged pixel rect, returning the input unchanged
/// when nothing can move.
pub fn resize(
    id: &TileId,
    dragged: Rect,
    tiles: &[Tile],
    engine: &LayoutEngine,
    metrics: &GridMetrics,
) -> Vec<Tile> {
    try_resize(id, dragged, tiles, engine, metrics).unwrap_or_else(|| tiles.to_vec())
}

/// Resize `id` toward the dragged pixel rect. Returns `None` for a no-op.
///
/// Floating tiles take the rect verbatim. Tiled ones snap it to the grid and
/// move the seam on each changed axis (columns first, then rows), carrying
/// every tile connected to that seam along.
pub fn try_resize(
    id: &TileId,
    dragged: Rect,
    tiles: &[Tile],
    engine: &LayoutEngine,
    metrics: &GridMetrics,
) -> Option<Vec<Tile>> {
    let tile = tiles.iter().find(|t| &t.id == id)?;
    if !tile.is_open {
        return None;
    }
    if tile.is_floating {
        let mut next = tiles.to_vec();
        for t in next.iter_mut().filter(|t| &t.id == id) {
            t.rect = dragged;
        }
        return Some(next);
    }
    if !metrics.is_valid() {
        return None;
    }

    let current = tile.grid;
    let candidate = engine.to_grid(&dragged, metrics);

    let mut next = tiles.to_vec();
    let mut moved = false;
    for axis in [Axis::X, Axis::Y] {
        let Some(seam) = SeamShift::detect(&current, &candidate, axis) else {
            continue;
        };
        if let Some(shifted) = shift_seam(&next, id, seam, engine.min_extent(axis)) {
            next = shifted;
            moved = true;
        }
    }

    if !moved {
        return None;
    }
    Some(engine.project(&next, metrics))
}

/// Move a seam by up to `seam.shift`, clamped so no tile on either side drops
/// below `min`. Returns `None` if one side of the seam is empty or the clamped
/// shift is zero.
pub fn shift_seam(tiles: &[Tile], dragged: &TileId, seam: SeamShift, min: f64) -> Option<Vec<Tile>> {
    let axis = seam.axis;
    let cross = axis.cross();

    let near: Vec<usize> = indices(tiles, |t| approx_eq(t.grid.end(axis), seam.seam));
    let far: Vec<usize> = indices(tiles, |t| approx_eq(t.grid.start(axis), seam.seam));

    let mut in_near = vec![false; tiles.len()];
    let mut in_far = vec![false; tiles.len()];
    let origin = tiles.iter().position(|t| &t.id == dragged)?;
    if seam.dragged_leads {
        if !near.contains(&origin) {
            return None;
        }
        in_near[origin] = true;
    } else {
        if !far.contains(&origin) {
            return None;
        }
        in_far[origin] = true;
    }

    // Flood across cross-axis overlaps until both groups stop growing.
    let mut changed = true;
    while changed {
        changed = false;
        for &n in &near {
            if !in_near[n] {
                continue;
            }
            for &f in &far {
                if !in_far[f] && tiles[n].grid.overlaps_on(&tiles[f].grid, cross) {
                    in_far[f] = true;
                    changed = true;
                }
            }
        }
        for &f in &far {
            if !in_far[f] {
                continue;
            }
            for &n in &near {
                if !in_near[n] && tiles[n].grid.overlaps_on(&tiles[f].grid, cross) {
                    in_near[n] = true;
                    changed = true;
                }
            }
        }
    }

    let near_group: Vec<usize> = near.into_iter().filter(|&i| in_near[i]).collect();
    let far_group: Vec<usize> = far.into_iter().filter(|&i| in_far[i]).collect();
    if near_group.is_empty() || far_group.is_empty() {
        debug!(%dragged, seam = seam.seam, "resize rejected: seam is on the grid boundary");
        return None;
    }

    let slack = |group: &[usize]| {
        group
            .iter()
            .map(|&i| tiles[i].grid.size(axis) - min)
            .fold(f64::INFINITY, f64::min)
            .max(0.0)
    };
    let max_positive = slack(&far_group);
    let max_negative = slack(&near_group);
    let shift = seam.shift.min(max_positive).max(-max_negative);
    if shift.abs() < EPSILON {
        debug!(%dragged, requested = seam.shift, "resize rejected: clamped to zero");
        return None;
    }

    let mut next = tiles.to_vec();
    for &i in &near_group {
        *next[i].grid.size_mut(axis) += shift;
    }
    for &i in &far_group {
        let grid = &mut next[i].grid;
        *grid.start_mut(axis) += shift;
        *grid.size_mut(axis) -= shift;
    }
    debug!(%dragged, requested = seam.shift, applied = shift, "seam moved");
    Some(next)
}

fn indices(tiles: &[Tile], pred: impl Fn(&Tile) -> bool) -> Vec<usize> {
    tiles
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_tiled() && pred(t))
        .map(|(i, _)| i)
        .collect()
}
