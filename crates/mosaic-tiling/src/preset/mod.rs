//! Saved layouts: named snapshots of the tile list.

mod operations;
mod types;

pub use types::*;
