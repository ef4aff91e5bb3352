//! Placement mode: a freshly opened tile floats until it is docked.

use mosaic_common::types::TileId;
use serde::{Deserialize, Serialize};

/// Whether a newly opened tile is waiting to be docked.
///
/// While `Placing`, only the placing tile may be toggled; every other
/// open/close request is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Idle,
    Placing(TileId),
}

impl Placement {
    /// The tile being placed, if any.
    pub fn placing(&self) -> Option<&TileId> {
        match self {
            Placement::Idle => None,
            Placement::Placing(id) => Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Placement::Placing(_))
    }

    /// Whether a toggle of `id` may proceed right now.
    pub fn allows_toggle(&self, id: &TileId) -> bool {
        match self {
            Placement::Idle => true,
            Placement::Placing(placing) => placing == id,
        }
    }

    pub fn begin(&mut self, id: TileId) {
        *self = Placement::Placing(id);
    }

    /// Leave placement mode, returning the tile that was being placed.
    pub fn finish(&mut self) -> Option<TileId> {
        match std::mem::take(self) {
            Placement::Idle => None,
            Placement::Placing(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let p = Placement::default();
        assert!(!p.is_active());
        assert_eq!(p.placing(), None);
        assert!(p.allows_toggle(&TileId::from("anything")));
    }

    #[test]
    fn placing_locks_other_tiles() {
        let mut p = Placement::default();
        p.begin(TileId::from("volume"));
        assert!(p.is_active());
        assert!(p.allows_toggle(&TileId::from("volume")));
        assert!(!p.allows_toggle(&TileId::from("draws")));
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut p = Placement::Placing(TileId::from("vote"));
        assert_eq!(p.finish(), Some(TileId::from("vote")));
        assert_eq!(p, Placement::Idle);
        assert_eq!(p.finish(), None);
    }

    #[test]
    fn serializes_tagged() {
        let p = Placement::Placing(TileId::from("vote"));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["state"], "placing");
        assert_eq!(json["id"], "vote");
    }
}
