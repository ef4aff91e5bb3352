//! The fixed set of dashboard widgets and their default arrangement.

use crate::grid::GridRect;
use crate::tile::Tile;

/// `(id, title, [gx, gy, gw, gh], open)` in dock order.
const CATALOG: &[(&str, &str, [f64; 4], bool)] = &[
    ("donations", "Donations", [0.0, 0.0, 16.0, 16.0], true),
    ("pending", "Pending Donations", [16.0, 0.0, 8.0, 24.0], true),
    ("quick_menu", "Quick Menu", [0.0, 16.0, 16.0, 8.0], true),
    ("features", "Donation Features", [0.0, 0.0, 12.0, 12.0], false),
    ("vote", "Vote", [0.0, 0.0, 12.0, 12.0], false),
    ("notifications", "Notification Settings", [0.0, 0.0, 12.0, 12.0], false),
    ("creator_menu", "Creator Menu", [0.0, 0.0, 12.0, 12.0], false),
    ("volume", "Volume Control", [0.0, 0.0, 12.0, 12.0], false),
    ("announcements", "Announcements", [0.0, 0.0, 12.0, 12.0], false),
    ("draws", "Draws Remaining", [0.0, 0.0, 12.0, 12.0], false),
    ("video_control", "Video Donation Control", [0.0, 0.0, 12.0, 12.0], false),
];

/// Every widget in catalog order, with the default layout applied.
/// Pixel rects are zero until projected.
pub fn default_tiles() -> Vec<Tile> {
    CATALOG
        .iter()
        .map(|&(id, title, [gx, gy, gw, gh], open)| {
            let mut tile = Tile::tiled(id, GridRect::new(gx, gy, gw, gh)).with_title(title);
            tile.is_open = open;
            tile
        })
        .collect()
}
