use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("state decode error: {0}")]
    Decode(String),

    #[error("state encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown tile: {0}")]
    UnknownTile(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("{0}")]
    Other(String),
}
