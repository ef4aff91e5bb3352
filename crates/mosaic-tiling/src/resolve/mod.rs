//! Pure resolvers: each takes the current tile list and returns the next one.

mod dock;
mod edges;
mod gap_fill;
mod resize;

pub use dock::{dock, try_dock};
pub use edges::{resizable_edges, ResizableEdges};
pub use gap_fill::{fill_gap, GapFill, Side};
pub use resize::{resize, shift_seam, try_resize, SeamShift};
