//! Core types and constructors for TilingManager.

use mosaic_common::types::TileId;

use crate::catalog;
use crate::grid::is_partition;
use crate::layout::{GridMetrics, LayoutEngine};
use crate::placement::Placement;
use crate::preset::PresetStore;
use crate::resolve::{resizable_edges, ResizableEdges};
use crate::snapshot::{merge, PersistedTile};
use crate::tile::{DockDirection, Tile};
use tracing::warn;

/// Viewport assumed until the host reports a real one.
pub const DEFAULT_VIEWPORT: (f64, f64) = (1920.0, 1080.0);

/// Pointer drag bookkeeping between `move`, `hover` and `drop`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Tile currently following the pointer.
    pub dragging: Option<TileId>,
    /// Tile under the pointer, if any.
    pub hovered: Option<TileId>,
    pub direction: DockDirection,
}

/// Owns the live tile list and threads placement mode, viewport metrics,
/// drag state, focus and presets through the resolvers.
///
/// Every command returns `true` if it changed state. A rejected command
/// leaves the tile list exactly as it was.
#[derive(Debug, Clone)]
pub struct TilingManager {
    pub(super) tiles: Vec<Tile>,
    pub(super) placement: Placement,
    pub(super) presets: PresetStore,
    pub(super) layout_engine: LayoutEngine,
    pub(super) metrics: GridMetrics,
    /// The tile last brought to the front.
    pub(super) focused: Option<TileId>,
    pub(super) drag: DragState,
}

impl TilingManager {
    /// The catalog's default layout on a viewport of `width` x `height`.
    pub fn new(layout_engine: LayoutEngine, width: f64, height: f64) -> Self {
        Self::with_state(layout_engine, width, height, catalog::default_tiles(), PresetStore::new())
    }

    /// Resume from an existing tile list and preset store.
    pub fn with_state(
        layout_engine: LayoutEngine,
        width: f64,
        height: f64,
        tiles: Vec<Tile>,
        presets: PresetStore,
    ) -> Self {
        let metrics = layout_engine.metrics(width, height);
        let mut mgr = Self {
            tiles,
            placement: Placement::Idle,
            presets,
            layout_engine,
            metrics,
            focused: None,
            drag: DragState::default(),
        };
        mgr.reproject();
        mgr
    }

    /// Resume from persisted records, overlaid on the catalog.
    pub fn from_persisted(
        layout_engine: LayoutEngine,
        width: f64,
        height: f64,
        persisted: &[PersistedTile],
        presets: PresetStore,
    ) -> Self {
        let tiles = merge(&catalog::default_tiles(), persisted);
        Self::with_state(layout_engine, width, height, tiles, presets)
    }

    /// Resume placement mode saved by an earlier session.
    ///
    /// Kept only while the named tile is still open and floating; anything
    /// else is stale and leaves the manager idle.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        let Some(placing) = placement.placing() else {
            return self;
        };
        let resumable = self
            .tile(placing)
            .is_some_and(|t| t.is_open && t.is_floating);
        if resumable {
            self.focused = Some(placing.clone());
            self.placement = placement;
        } else {
            warn!(id = %placing, "dropping stale placement");
        }
        self
    }

    // -- Accessors --

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn focused_id(&self) -> Option<&TileId> {
        self.focused.as_ref()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Whether the open tiled tiles exactly cover the grid.
    pub fn is_consistent(&self) -> bool {
        is_partition(&self.tiles, self.layout_engine.cols, self.layout_engine.rows)
    }

    /// Edges of `id` that may be offered as resize handles.
    pub fn resizable_edges(&self, id: &TileId) -> Option<ResizableEdges> {
        self.tile(id).map(|tile| resizable_edges(tile, &self.tiles))
    }

    /// Replace the live list and re-derive pixel rects.
    pub(super) fn commit(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
        self.reproject();
    }

    /// Re-derive pixel rects from grid rects. Skipped while the viewport is
    /// too small to lay anything out.
    pub(super) fn reproject(&mut self) {
        if self.metrics.is_valid() {
            self.tiles = self.layout_engine.project(&self.tiles, &self.metrics);
        }
    }
}

impl Default for TilingManager {
    fn default() -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self::new(LayoutEngine::default(), width, height)
    }
}
