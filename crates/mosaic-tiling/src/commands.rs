use mosaic_common::types::{PresetId, Rect, TileId};
use serde::{Deserialize, Serialize};

use crate::tile::DockDirection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "snake_case")]
pub enum TilingCommand {
    /// Open a closed tile or close an open one.
    Toggle(TileId),
    /// Bring a tile to the front.
    Focus(TileId),
    /// Pointer drag in progress: move the tile's pixel origin.
    Move { id: TileId, x: f64, y: f64 },
    /// The dragged tile is over `target` near the given edge.
    Hover {
        target: Option<TileId>,
        direction: DockDirection,
    },
    /// Pointer released. Docks onto `target` when one is given.
    Drop {
        id: TileId,
        target: Option<TileId>,
        direction: DockDirection,
    },
    /// Resize handle dragged to a new pixel rect.
    Resize { id: TileId, rect: Rect },
    ResizeEnd,
    SavePreset { name: String, icon: String },
    UpdatePreset,
    LoadPreset(PresetId),
    DeletePreset(PresetId),
    RenamePreset { id: PresetId, name: String },
    ResetLayout,
    SetViewport { width: f64, height: f64 },
}
