//! JSON state file: the live tile list, saved presets and placement mode.

use std::path::{Path, PathBuf};

use mosaic_common::types::PresetId;
use mosaic_common::StoreError;
use mosaic_tiling::snapshot::{decode_presets, decode_values};
use mosaic_tiling::{PersistedTile, Placement, Preset, PresetStore, Tile, TilingManager};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// On-disk shape of the state file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateFile<'a> {
    tiles: &'a [Tile],
    presets: &'a [Preset],
    #[serde(skip_serializing_if = "Option::is_none")]
    active_preset: Option<&'a PresetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<&'a Placement>,
}

/// What a state file yielded, ready to overlay on the catalog.
#[derive(Debug, Default)]
pub struct LoadedState {
    pub tiles: Vec<PersistedTile>,
    pub presets: PresetStore,
    /// Placement left open by the previous session.
    pub placement: Placement,
}

/// Read a state file. A missing file is not an error and yields nothing.
///
/// A bare JSON array is accepted as a tile list without presets.
pub fn load(path: &Path) -> Result<Option<LoadedState>, StoreError> {
    if !path.exists() {
        debug!("no state file at {}", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let doc: Value =
        serde_json::from_str(&content).map_err(|e| StoreError::Decode(e.to_string()))?;

    let state = match doc {
        Value::Array(entries) => LoadedState {
            tiles: decode_values(&entries),
            presets: PresetStore::new(),
            placement: Placement::Idle,
        },
        Value::Object(map) => {
            let tiles = match map.get("tiles") {
                Some(Value::Array(entries)) => decode_values(entries),
                Some(_) => {
                    warn!("state file `tiles` is not an array, using defaults");
                    Vec::new()
                }
                None => Vec::new(),
            };
            let presets = match map.get("presets") {
                Some(Value::Array(entries)) => decode_presets(entries),
                _ => Vec::new(),
            };
            let active = map
                .get("activePreset")
                .and_then(Value::as_str)
                .map(PresetId::from);
            let placement = match map.get("placement") {
                Some(value) => Placement::deserialize(value).unwrap_or_else(|e| {
                    warn!(error = %e, "ignoring malformed placement");
                    Placement::Idle
                }),
                None => Placement::Idle,
            };
            LoadedState {
                tiles,
                presets: PresetStore::from_presets(presets, active),
                placement,
            }
        }
        _ => {
            return Err(StoreError::Decode(
                "state file must be an object or an array".into(),
            ))
        }
    };
    info!(
        tiles = state.tiles.len(),
        presets = state.presets.len(),
        "loaded state from {}",
        path.display()
    );
    Ok(Some(state))
}

/// Write the manager's tiles, presets and placement, replacing `path` atomically.
pub fn save(path: &Path, mgr: &TilingManager) -> Result<(), StoreError> {
    let state = StateFile {
        tiles: mgr.tiles(),
        presets: mgr.presets().list(),
        active_preset: mgr.presets().active_id(),
        placement: Some(mgr.placement()).filter(|p| p.is_active()),
    };
    let json = serde_json::to_string_pretty(&state).map_err(|e| StoreError::Encode(e.to_string()))?;

    let write_err = |path: &Path, e: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }
    let tmp = tmp_path(path);
    std::fs::write(&tmp, json).map_err(|e| write_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| write_err(path, e))?;

    debug!("saved state to {}", path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
