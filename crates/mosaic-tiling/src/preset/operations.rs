//! Mutating operations on PresetStore: save, rename, delete, activate.

use mosaic_common::types::PresetId;
use tracing::debug;

use crate::tile::Tile;

use super::{Preset, PresetStore};

impl PresetStore {
    /// Snapshot `tiles` under a fresh id and make it the active preset.
    pub fn save(&mut self, name: impl Into<String>, icon: impl Into<String>, tiles: &[Tile]) -> &Preset {
        let preset = Preset {
            id: PresetId::new(),
            name: name.into(),
            icon: icon.into(),
            tiles: tiles.to_vec(),
        };
        debug!(id = %preset.id, name = %preset.name, "preset saved");
        self.active = Some(preset.id.clone());
        let index = self.presets.len();
        self.presets.push(preset);
        &self.presets[index]
    }

    /// Overwrite the active preset's snapshot. Returns `false` when no
    /// preset is active.
    pub fn update_active(&mut self, tiles: &[Tile]) -> bool {
        let Some(active) = self.active.clone() else {
            return false;
        };
        match self.presets.iter_mut().find(|p| p.id == active) {
            Some(preset) => {
                preset.tiles = tiles.to_vec();
                debug!(id = %preset.id, "preset updated");
                true
            }
            None => false,
        }
    }

    /// Returns `false` if `id` is unknown.
    pub fn rename(&mut self, id: &PresetId, name: impl Into<String>) -> bool {
        match self.presets.iter_mut().find(|p| &p.id == id) {
            Some(preset) => {
                preset.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove a preset. Clears the active marker if it pointed here.
    pub fn delete(&mut self, id: &PresetId) -> bool {
        let Some(idx) = self.presets.iter().position(|p| &p.id == id) else {
            return false;
        };
        self.presets.remove(idx);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        debug!(%id, "preset deleted");
        true
    }

    /// Mark `id` as active. Returns `false` if it is unknown.
    pub fn activate(&mut self, id: &PresetId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = Some(id.clone());
        true
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }
}
