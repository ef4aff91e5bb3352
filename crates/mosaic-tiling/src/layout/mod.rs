mod calculation;
mod types;

pub use types::*;
