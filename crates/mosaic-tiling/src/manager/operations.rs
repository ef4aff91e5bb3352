//! Open, close and focus operations on the TilingManager.

use mosaic_common::types::TileId;
use tracing::{debug, info, warn};

use crate::resolve::fill_gap;
use crate::tile::{max_z_index, DEFAULT_Z_INDEX};

use super::TilingManager;

impl TilingManager {
    /// Open a closed tile or close an open one.
    ///
    /// While another tile is being placed this is a no-op.
    pub fn toggle(&mut self, id: &TileId) -> bool {
        let Some(is_open) = self.tile(id).map(|t| t.is_open) else {
            return false;
        };
        if !self.placement.allows_toggle(id) {
            info!(%id, placing = ?self.placement.placing(), "toggle ignored while placing");
            return false;
        }
        if is_open {
            self.close(id)
        } else {
            self.open(id)
        }
    }

    /// Open `id`. Onto an empty dashboard it fills the grid; otherwise it
    /// floats in the centre and placement mode begins.
    pub fn open(&mut self, id: &TileId) -> bool {
        if !self.placement.allows_toggle(id) {
            return false;
        }
        let any_other_open = self.tiles.iter().any(|t| t.is_open && &t.id != id);
        let float_rect = self.layout_engine.centered_float(&self.metrics);
        let full_grid = self.layout_engine.full_grid();
        let top_z = max_z_index(&self.tiles) + 1;

        let Some(tile) = self.tiles.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        if tile.is_open {
            return false;
        }
        tile.is_open = true;
        tile.is_minimized = false;

        if any_other_open {
            tile.is_floating = true;
            tile.rect = float_rect;
            tile.z_index = top_z;
            self.placement.begin(id.clone());
            debug!(%id, "opened floating, placement started");
        } else {
            tile.is_floating = false;
            tile.grid = full_grid;
            tile.z_index = DEFAULT_Z_INDEX;
            self.reproject();
            debug!(%id, "opened onto empty grid");
        }
        self.focused = Some(id.clone());
        true
    }

    /// Close `id`, letting its neighbours reclaim the space.
    pub fn close(&mut self, id: &TileId) -> bool {
        if !self.placement.allows_toggle(id) {
            return false;
        }
        let Some(tile) = self.tile(id).cloned() else {
            return false;
        };
        if !tile.is_open {
            return false;
        }
        if self.placement.placing() == Some(id) {
            self.placement.finish();
        }
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }

        let tiled = self.tiles.iter().filter(|t| t.is_tiled()).count();
        if tile.is_floating || tiled == 1 {
            for t in self.tiles.iter_mut().filter(|t| &t.id == id) {
                t.is_open = false;
                t.is_floating = false;
            }
            debug!(%id, "closed without gap fill");
            return true;
        }

        let fill = fill_gap(id, &self.tiles);
        match fill.side {
            Some(side) => debug!(%id, ?side, "closed, gap absorbed"),
            None => warn!(%id, grid = ?tile.grid, "closed, no neighbour covers the gap"),
        }
        self.commit(fill.tiles);
        true
    }

    /// Bring `id` to the front. A floating tile is raised above every other
    /// tile; tiled tiles only take focus.
    pub fn focus(&mut self, id: &TileId) -> bool {
        let Some((is_open, is_floating, z)) = self
            .tile(id)
            .map(|t| (t.is_open, t.is_floating, t.z_index))
        else {
            return false;
        };
        if !is_open {
            return false;
        }
        if is_floating && self.tiles.iter().any(|t| &t.id != id && t.z_index >= z) {
            let top_z = max_z_index(&self.tiles) + 1;
            for t in self.tiles.iter_mut().filter(|t| &t.id == id) {
                t.z_index = top_z;
            }
        }
        self.focused = Some(id.clone());
        true
    }
}
