//! The per-widget layout record and the dock direction vocabulary.

use std::fmt;
use std::str::FromStr;

use mosaic_common::types::{Rect, TileId};
use serde::{Deserialize, Serialize};

use crate::grid::{Axis, GridRect};

/// Stacking order given to tiles that sit in the mosaic.
pub const DEFAULT_Z_INDEX: u32 = 10;

/// One widget's layout record.
///
/// `grid` is authoritative while the tile is tiled; `rect` is derived from it
/// by projection. While `is_floating` is set the roles swap: `rect` is where
/// the tile actually is and `grid` is stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: TileId,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub grid: GridRect,
    #[serde(flatten)]
    pub rect: Rect,
    pub is_open: bool,
    #[serde(default)]
    pub is_floating: bool,
    #[serde(default)]
    pub is_minimized: bool,
    #[serde(default = "default_z_index")]
    pub z_index: u32,
}

fn default_z_index() -> u32 {
    DEFAULT_Z_INDEX
}

impl Tile {
    /// An open, tiled record with no title and an unprojected pixel rect.
    pub fn tiled(id: impl Into<TileId>, grid: GridRect) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            grid,
            rect: Rect::default(),
            is_open: true,
            is_floating: false,
            is_minimized: false,
            z_index: DEFAULT_Z_INDEX,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open and part of the mosaic.
    pub fn is_tiled(&self) -> bool {
        self.is_open && !self.is_floating
    }
}

/// Highest stacking order among `tiles`, or 0 for an empty list.
pub fn max_z_index(tiles: &[Tile]) -> u32 {
    tiles.iter().map(|t| t.z_index).max().unwrap_or(0)
}

/// Where a dragged tile lands relative to the tile it is dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockDirection {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    #[default]
    None,
}

impl DockDirection {
    /// The axis a split in this direction cuts along, `None` for center/none.
    pub fn split_axis(self) -> Option<Axis> {
        match self {
            DockDirection::Left | DockDirection::Right => Some(Axis::X),
            DockDirection::Top | DockDirection::Bottom => Some(Axis::Y),
            DockDirection::Center | DockDirection::None => None,
        }
    }

    /// Left and top put the source before the target on the split axis.
    pub fn source_leads(self) -> bool {
        matches!(self, DockDirection::Left | DockDirection::Top)
    }
}

impl fmt::Display for DockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DockDirection::Top => "top",
            DockDirection::Bottom => "bottom",
            DockDirection::Left => "left",
            DockDirection::Right => "right",
            DockDirection::Center => "center",
            DockDirection::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for DockDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(DockDirection::Top),
            "bottom" => Ok(DockDirection::Bottom),
            "left" => Ok(DockDirection::Left),
            "right" => Ok(DockDirection::Right),
            "center" => Ok(DockDirection::Center),
            "none" => Ok(DockDirection::None),
            other => Err(format!("unknown dock direction: {other}")),
        }
    }
}
