pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, MosaicError, StoreError};
pub use id::new_id;
pub use types::{PresetId, Rect, TileId};

pub type Result<T> = std::result::Result<T, MosaicError>;
