//! Persisted tile state: tolerant decoding and merging over the catalog.
//!
//! Saved state may come from an older build or be hand-edited, so decoding
//! never rejects an entry for one bad field. Each field that is missing or of
//! the wrong type simply falls back to the catalog default during [`merge`].

use mosaic_common::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::preset::Preset;
use crate::tile::Tile;

/// One saved tile record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTile {
    pub id: String,
    pub gx: Option<f64>,
    pub gy: Option<f64>,
    pub gw: Option<f64>,
    pub gh: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub is_open: Option<bool>,
    pub is_floating: Option<bool>,
    pub is_minimized: Option<bool>,
    pub z_index: Option<u32>,
}

impl PersistedTile {
    /// Read whatever fields are usable from one JSON entry. Returns `None`
    /// when the entry is not an object or has no string `id`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj.get("id")?.as_str()?.to_string();
        let num = |key: &str| obj.get(key).and_then(Value::as_f64);
        let flag = |key: &str| obj.get(key).and_then(Value::as_bool);

        Some(Self {
            id,
            gx: num("gx"),
            gy: num("gy"),
            gw: num("gw"),
            gh: num("gh"),
            x: num("x"),
            y: num("y"),
            width: num("width"),
            height: num("height"),
            is_open: flag("isOpen"),
            is_floating: flag("isFloating"),
            is_minimized: flag("isMinimized"),
            z_index: obj
                .get("zIndex")
                .and_then(Value::as_u64)
                .and_then(|z| u32::try_from(z).ok()),
        })
    }

    fn apply_to(&self, tile: &mut Tile) {
        let fields = [
            (&mut tile.grid.gx, self.gx),
            (&mut tile.grid.gy, self.gy),
            (&mut tile.grid.gw, self.gw),
            (&mut tile.grid.gh, self.gh),
            (&mut tile.rect.x, self.x),
            (&mut tile.rect.y, self.y),
            (&mut tile.rect.width, self.width),
            (&mut tile.rect.height, self.height),
        ];
        for (slot, value) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(v) = self.is_open {
            tile.is_open = v;
        }
        if let Some(v) = self.is_floating {
            tile.is_floating = v;
        }
        if let Some(v) = self.is_minimized {
            tile.is_minimized = v;
        }
        if let Some(v) = self.z_index {
            tile.z_index = v;
        }
    }
}

/// Decode a saved tile list. Fails only if the document is not a JSON array;
/// unusable entries are skipped.
pub fn decode_tiles(json: &str) -> Result<Vec<PersistedTile>, StoreError> {
    let value: Value = serde_json::from_str(json).map_err(|e| StoreError::Decode(e.to_string()))?;
    match value {
        Value::Array(entries) => Ok(decode_values(&entries)),
        other => Err(StoreError::Decode(format!(
            "expected an array of tiles, found {}",
            kind(&other)
        ))),
    }
}

/// Decode already-parsed tile entries, skipping unusable ones.
pub fn decode_values(entries: &[Value]) -> Vec<PersistedTile> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let tile = PersistedTile::from_value(entry);
            if tile.is_none() {
                warn!(index, "skipping persisted tile without an id");
            }
            tile
        })
        .collect()
}

/// Decode saved presets, skipping entries that do not parse.
pub fn decode_presets(entries: &[Value]) -> Vec<Preset> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Preset::deserialize(entry) {
            Ok(preset) => Some(preset),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed preset");
                None
            }
        })
        .collect()
}

/// Overlay persisted records onto the catalog, field by field.
///
/// The catalog decides which tiles exist and their order: persisted ids it
/// does not know are ignored, and catalog tiles with no record keep their
/// defaults. Titles always come from the catalog.
pub fn merge(catalog: &[Tile], persisted: &[PersistedTile]) -> Vec<Tile> {
    for record in persisted {
        if !catalog.iter().any(|t| t.id.as_str() == record.id) {
            warn!(id = %record.id, "ignoring persisted tile not in the catalog");
        }
    }

    catalog
        .iter()
        .map(|tile| {
            let mut tile = tile.clone();
            if let Some(record) = persisted.iter().find(|p| p.id == tile.id.as_str()) {
                record.apply_to(&mut tile);
            }
            tile
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_tiles;
    use crate::grid::GridRect;

    fn find<'a>(tiles: &'a [Tile], id: &str) -> &'a Tile {
        tiles.iter().find(|t| t.id.as_str() == id).unwrap()
    }

    #[test]
    fn decode_rejects_non_array() {
        let err = decode_tiles(r#"{"tiles": []}"#).unwrap_err();
        assert!(err.to_string().contains("an object"));
        assert!(decode_tiles("not json").is_err());
    }

    #[test]
    fn decode_skips_entries_without_id() {
        let json = r#"[{"gx": 1}, 42, {"id": "vote", "isOpen": true}]"#;
        let tiles = decode_tiles(json).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].id, "vote");
        assert_eq!(tiles[0].is_open, Some(true));
    }

    #[test]
    fn decode_drops_badly_typed_fields_only() {
        let json = r#"[{"id": "vote", "gx": "wide", "gw": 6, "isOpen": "yes", "zIndex": -3}]"#;
        let tiles = decode_tiles(json).unwrap();
        assert_eq!(tiles[0].gx, None);
        assert_eq!(tiles[0].gw, Some(6.0));
        assert_eq!(tiles[0].is_open, None);
        assert_eq!(tiles[0].z_index, None);
    }

    #[test]
    fn merge_overrides_per_field() {
        let persisted = vec![PersistedTile {
            id: "donations".into(),
            gw: Some(12.0),
            z_index: Some(14),
            ..PersistedTile::default()
        }];
        let tiles = merge(&default_tiles(), &persisted);
        let donations = find(&tiles, "donations");
        assert_eq!(donations.grid, GridRect::new(0.0, 0.0, 12.0, 16.0));
        assert_eq!(donations.z_index, 14);
        assert!(donations.is_open);
        assert_eq!(donations.title, "Donations");
    }

    #[test]
    fn merge_ignores_unknown_ids_and_keeps_catalog_order() {
        let persisted = vec![
            PersistedTile {
                id: "chat".into(),
                is_open: Some(true),
                ..PersistedTile::default()
            },
            PersistedTile {
                id: "volume".into(),
                is_open: Some(true),
                is_floating: Some(true),
                ..PersistedTile::default()
            },
        ];
        let catalog = default_tiles();
        let tiles = merge(&catalog, &persisted);
        assert_eq!(tiles.len(), catalog.len());
        assert!(tiles.iter().all(|t| t.id.as_str() != "chat"));
        let volume = find(&tiles, "volume");
        assert!(volume.is_open && volume.is_floating);
        assert_eq!(tiles[7].id.as_str(), "volume");
    }

    #[test]
    fn merge_with_nothing_is_catalog() {
        let catalog = default_tiles();
        assert_eq!(merge(&catalog, &[]), catalog);
    }

    #[test]
    fn decode_presets_skips_malformed() {
        let entries: Vec<Value> = serde_json::from_str(
            r#"[
                {"id": "p1", "name": "Main", "icon": "star", "tiles": []},
                {"name": "no id"},
                {"id": "p2", "name": "Legacy", "windows": []}
            ]"#,
        )
        .unwrap();
        let presets = decode_presets(&entries);
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[1].name, "Legacy");
        assert_eq!(presets[1].icon, "");
    }
}
