//! Dropping one tile onto another: swap, adopt, or split.

use mosaic_common::types::TileId;
use tracing::debug;

use crate::grid::{GridRect, EPSILON};
use crate::layout::{GridMetrics, LayoutEngine};
use crate::tile::{max_z_index, DockDirection, Tile};

use super::gap_fill::fill_gap;

/// Dock `source` onto `target`, returning the input unchanged when the drop
/// is rejected.
pub fn dock(
    source: &TileId,
    target: &TileId,
    direction: DockDirection,
    tiles: &[Tile],
    engine: &LayoutEngine,
    metrics: &GridMetrics,
) -> Vec<Tile> {
    try_dock(source, target, direction, tiles, engine, metrics).unwrap_or_else(|| tiles.to_vec())
}

/// Dock `source` onto `target`. Returns `None` when the drop is rejected.
///
/// Rejected when the direction is `None`, either id is unknown or both are
/// the same tile, the source is closed, the target is not tiled, vacating
/// the source's old slot leaves a gap, or a split would shrink the target
/// below the minimum size.
pub fn try_dock(
    source: &TileId,
    target: &TileId,
    direction: DockDirection,
    tiles: &[Tile],
    engine: &LayoutEngine,
    metrics: &GridMetrics,
) -> Option<Vec<Tile>> {
    if direction == DockDirection::None || source == target {
        return None;
    }
    let src = tiles.iter().find(|t| &t.id == source)?;
    let tgt = tiles.iter().find(|t| &t.id == target)?;
    if !src.is_open || !tgt.is_tiled() {
        debug!(%source, %target, "dock rejected: source closed or target not tiled");
        return None;
    }

    // A center drop trades slots, so nothing is vacated.
    let mut next = if direction != DockDirection::Center && src.is_tiled() {
        let fill = fill_gap(source, tiles);
        if fill.side.is_none() {
            debug!(%source, "dock rejected: vacated slot cannot be reclaimed");
            return None;
        }
        fill.tiles
    } else {
        tiles.to_vec()
    };

    let si = next.iter().position(|t| &t.id == source)?;
    let ti = next.iter().position(|t| &t.id == target)?;

    match direction.split_axis() {
        None => {
            if next[si].is_floating {
                let z = max_z_index(&next) + 1;
                next[si].grid = next[ti].grid;
                let displaced = &mut next[ti];
                displaced.is_floating = true;
                displaced.rect = engine.centered_float(metrics);
                displaced.z_index = z;
            } else {
                let grid = next[si].grid;
                next[si].grid = next[ti].grid;
                next[ti].grid = grid;
            }
        }
        Some(axis) => {
            let min = engine.min_extent(axis);
            let mut remaining: GridRect = next[ti].grid;
            let extent = remaining.size(axis);
            let split = min.max((extent / 2.0).floor());
            if extent - split < min - EPSILON {
                debug!(%target, extent, "dock rejected: target too small to split");
                return None;
            }

            let mut taken = remaining;
            *taken.size_mut(axis) = split;
            *remaining.size_mut(axis) = extent - split;
            if direction.source_leads() {
                *remaining.start_mut(axis) += split;
            } else {
                *taken.start_mut(axis) += extent - split;
            }
            next[si].grid = taken;
            next[ti].grid = remaining;
        }
    }

    let docked = &mut next[si];
    docked.is_floating = false;
    docked.is_open = true;
    docked.is_minimized = false;

    debug!(%source, %target, %direction, "docked");
    Some(engine.project(&next, metrics))
}
