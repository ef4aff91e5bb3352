//! Mosaic invariant check: open tiled rectangles cover the grid exactly once.

use crate::tile::Tile;

/// Returns `true` when the open, non-floating tiles partition the
/// `cols` x `rows` grid with no overlap and no uncovered cell.
///
/// Rectangles are rounded to whole cells before rasterising, so sub-epsilon
/// drift does not count as a violation. An empty mosaic is not a partition.
pub fn is_partition(tiles: &[Tile], cols: u32, rows: u32) -> bool {
    let cols = cols as usize;
    let rows = rows as usize;
    let mut cells = vec![0u8; cols * rows];

    for tile in tiles.iter().filter(|t| t.is_tiled()) {
        let g = &tile.grid;
        let (x0, y0) = (g.gx.round(), g.gy.round());
        let (x1, y1) = (g.right().round(), g.bottom().round());
        if x0 < 0.0 || y0 < 0.0 || x1 > cols as f64 || y1 > rows as f64 || x1 <= x0 || y1 <= y0
        {
            return false;
        }
        for y in y0 as usize..y1 as usize {
            for x in x0 as usize..x1 as usize {
                let cell = &mut cells[y * cols + x];
                if *cell > 0 {
                    return false;
                }
                *cell = 1;
            }
        }
    }

    cells.iter().all(|&c| c == 1)
}
