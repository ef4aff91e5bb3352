//! Preset and reset operations on the TilingManager.

use mosaic_common::types::PresetId;
use tracing::{debug, info};

use crate::catalog;

use super::TilingManager;

impl TilingManager {
    /// Snapshot the live layout as a new active preset.
    pub fn save_preset(&mut self, name: impl Into<String>, icon: impl Into<String>) -> PresetId {
        self.presets.save(name, icon, &self.tiles).id.clone()
    }

    /// Overwrite the active preset with the live layout.
    pub fn update_preset(&mut self) -> bool {
        self.presets.update_active(&self.tiles)
    }

    /// Replace the live layout with a preset's snapshot.
    ///
    /// Grid rects are taken as stored and re-projected onto the current
    /// viewport. Any placement in progress is abandoned.
    pub fn load_preset(&mut self, id: &PresetId) -> bool {
        let Some(tiles) = self.presets.get(id).map(|p| p.tiles.clone()) else {
            info!(%id, "unknown preset");
            return false;
        };
        self.presets.activate(id);
        self.placement.finish();
        self.drag = Default::default();
        self.commit(tiles);
        debug!(%id, "preset loaded");
        true
    }

    pub fn delete_preset(&mut self, id: &PresetId) -> bool {
        self.presets.delete(id)
    }

    pub fn rename_preset(&mut self, id: &PresetId, name: impl Into<String>) -> bool {
        self.presets.rename(id, name)
    }

    /// Back to the catalog's default layout.
    pub fn reset_layout(&mut self) -> bool {
        self.presets.clear_active();
        self.placement.finish();
        self.drag = Default::default();
        self.focused = None;
        self.commit(catalog::default_tiles());
        debug!("layout reset to defaults");
        true
    }
}
