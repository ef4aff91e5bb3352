//! Grid coordinate system: rectangles, tolerance, and the partition check.

mod partition;
mod types;

pub use partition::is_partition;
pub use types::*;
