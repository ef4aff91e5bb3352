//! Pointer-driven operations: drag, hover, drop and resize.

use mosaic_common::types::{Rect, TileId};
use tracing::{debug, info};

use crate::resolve::{try_dock, try_resize};
use crate::tile::DockDirection;

use super::{DragState, TilingManager};

impl TilingManager {
    /// Follow the pointer: only the dragged tile's pixel origin changes.
    pub fn move_tile(&mut self, id: &TileId, x: f64, y: f64) -> bool {
        let Some(tile) = self.tiles.iter_mut().find(|t| &t.id == id && t.is_open) else {
            return false;
        };
        tile.rect.x = x;
        tile.rect.y = y;
        self.drag.dragging = Some(id.clone());
        true
    }

    /// Record the tile under the pointer and which edge zone it is in.
    pub fn hover(&mut self, target: Option<TileId>, direction: DockDirection) -> bool {
        if self.drag.hovered == target && self.drag.direction == direction {
            return false;
        }
        self.drag.hovered = target;
        self.drag.direction = direction;
        true
    }

    /// Release `id` over `target`. Without a target the hover recorded by
    /// [`hover`](Self::hover) is used. Returns `true` if the tile docked;
    /// otherwise the layout snaps back to its grid positions.
    pub fn drop_tile(&mut self, id: &TileId, target: Option<TileId>, direction: DockDirection) -> bool {
        let drag = std::mem::take(&mut self.drag);
        let (target, direction) = match target {
            Some(target) => (Some(target), direction),
            None => (drag.hovered, drag.direction),
        };

        let docked = target.and_then(|target| {
            try_dock(id, &target, direction, &self.tiles, &self.layout_engine, &self.metrics)
        });
        match docked {
            Some(tiles) => {
                self.tiles = tiles;
                if self.placement.placing() == Some(id) {
                    self.placement.finish();
                    debug!(%id, "placement finished");
                }
                true
            }
            None => {
                if direction != DockDirection::None {
                    info!(%id, %direction, "drop rejected, snapping back");
                }
                self.reproject();
                false
            }
        }
    }

    /// Drop using only the recorded hover state.
    pub fn drop_hovered(&mut self, id: &TileId) -> bool {
        self.drop_tile(id, None, DockDirection::None)
    }

    /// Resize handle dragged: move the seams the tile shares with others.
    pub fn resize(&mut self, id: &TileId, rect: Rect) -> bool {
        match try_resize(id, rect, &self.tiles, &self.layout_engine, &self.metrics) {
            Some(tiles) => {
                self.tiles = tiles;
                true
            }
            None => false,
        }
    }

    /// Resize handle released.
    pub fn resize_end(&mut self) -> bool {
        self.drag = DragState::default();
        self.reproject();
        true
    }
}
