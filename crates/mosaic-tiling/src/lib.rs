//! Grid tiling engine for the dashboard's widget panels.
//!
//! Tiles live on a 24x24 grid and are projected to pixels for the current
//! viewport. The resolvers in [`resolve`] are pure functions over tile
//! lists; [`TilingManager`] owns the live state and dispatches commands.

pub mod catalog;
pub mod commands;
pub mod grid;
pub mod layout;
pub mod manager;
pub mod placement;
pub mod preset;
pub mod resolve;
pub mod snapshot;
pub mod tile;

pub use commands::TilingCommand;
pub use grid::{GridRect, EPSILON};
pub use layout::{GridMetrics, LayoutEngine};
pub use manager::TilingManager;
pub use placement::Placement;
pub use preset::{Preset, PresetStore};
pub use snapshot::PersistedTile;
pub use tile::{DockDirection, Tile};
