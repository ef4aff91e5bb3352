//! Default viewport used when the host does not report one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels (valid range: 200-16384).
    pub width: u32,
    /// Height in pixels (valid range: 200-16384).
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_defaults_to_full_hd() {
        let config = ViewportConfig::default();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
    }
}
