//! Which edges of a tile have a neighbour to push against.

use serde::{Deserialize, Serialize};

use crate::grid::{approx_eq, Axis};
use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizableEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizableEdges {
    pub const ALL: ResizableEdges = ResizableEdges {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };
}

/// Edges of `tile` that a resize handle should be offered on.
///
/// A floating tile resizes freely. A tiled one only on edges where another
/// tiled tile sits flush with an overlapping span, since an edge on the grid
/// boundary has nothing on the far side of its seam.
pub fn resizable_edges(tile: &Tile, tiles: &[Tile]) -> ResizableEdges {
    if tile.is_floating {
        return ResizableEdges::ALL;
    }

    let g = &tile.grid;
    let others: Vec<&Tile> = tiles
        .iter()
        .filter(|t| t.id != tile.id && t.is_tiled())
        .collect();
    let any = |flush: &dyn Fn(&Tile) -> bool, cross: Axis| {
        others
            .iter()
            .any(|t| flush(t) && g.overlaps_on(&t.grid, cross))
    };

    ResizableEdges {
        top: any(&|t| approx_eq(t.grid.bottom(), g.gy), Axis::X),
        bottom: any(&|t| approx_eq(t.grid.gy, g.bottom()), Axis::X),
        left: any(&|t| approx_eq(t.grid.right(), g.gx), Axis::Y),
        right: any(&|t| approx_eq(t.grid.gx, g.right()), Axis::Y),
    }
}
