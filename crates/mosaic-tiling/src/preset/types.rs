//! Core types for saved layouts.

use mosaic_common::types::PresetId;
use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// A named snapshot of the whole tile list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Older state files store the snapshot under `windows`.
    #[serde(alias = "windows")]
    pub tiles: Vec<Tile>,
}

/// The saved presets plus which one the live layout came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetStore {
    pub(super) presets: Vec<Preset>,
    pub(super) active: Option<PresetId>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted presets. An `active` id that no longer
    /// names a preset is dropped.
    pub fn from_presets(presets: Vec<Preset>, active: Option<PresetId>) -> Self {
        let active = active.filter(|id| presets.iter().any(|p| &p.id == id));
        Self { presets, active }
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets in the order they were saved.
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, id: &PresetId) -> Option<&Preset> {
        self.presets.iter().find(|p| &p.id == id)
    }

    /// First preset whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn active_id(&self) -> Option<&PresetId> {
        self.active.as_ref()
    }

    pub fn active(&self) -> Option<&Preset> {
        self.active.as_ref().and_then(|id| self.get(id))
    }
}
