//! The TilingManager owns the live tile list and routes commands through
//! the resolvers, placement mode and the preset store.

mod dispatch;
mod drag;
mod operations;
mod presets;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_tiles;
    use crate::commands::TilingCommand;
    use crate::grid::GridRect;
    use crate::layout::LayoutEngine;
    use crate::placement::Placement;
    use crate::preset::PresetStore;
    use crate::snapshot::PersistedTile;
    use crate::tile::DockDirection;
    use mosaic_common::types::{PresetId, Rect, TileId};

    fn id(s: &str) -> TileId {
        TileId::from(s)
    }

    fn grid(mgr: &TilingManager, tile: &str) -> GridRect {
        mgr.tile(&id(tile)).unwrap().grid
    }

    fn pixels(mgr: &TilingManager, g: GridRect) -> Rect {
        mgr.layout_engine().grid_to_pixels(&g, mgr.metrics())
    }

    #[test]
    fn default_manager_shows_catalog_layout() {
        let mgr = TilingManager::default();
        assert_eq!(mgr.tiles().len(), 11);
        assert!(mgr.is_consistent());
        assert_eq!(mgr.placement(), &Placement::Idle);
        let donations = mgr.tile(&id("donations")).unwrap();
        assert_eq!(donations.rect, pixels(&mgr, donations.grid));
        assert!(donations.rect.width > 0.0);
    }

    #[test]
    fn opening_with_others_open_floats_and_places() {
        let mut mgr = TilingManager::default();
        assert!(mgr.toggle(&id("volume")));
        let volume = mgr.tile(&id("volume")).unwrap();
        assert!(volume.is_open && volume.is_floating);
        assert_eq!(volume.z_index, 11);
        assert_eq!(volume.rect, Rect::new(720.0, 360.0, 480.0, 360.0));
        assert_eq!(mgr.placement().placing(), Some(&id("volume")));
        assert_eq!(mgr.focused_id(), Some(&id("volume")));
        assert!(mgr.is_consistent());
    }

    #[test]
    fn placing_locks_other_toggles() {
        let mut mgr = TilingManager::default();
        mgr.toggle(&id("volume"));
        let before = mgr.tiles().to_vec();

        assert!(!mgr.toggle(&id("draws")));
        assert!(!mgr.toggle(&id("donations")));
        assert!(!mgr.close(&id("pending")));
        assert_eq!(mgr.tiles(), before.as_slice());

        // Toggling the placing tile closes it and ends placement.
        assert!(mgr.toggle(&id("volume")));
        assert_eq!(mgr.placement(), &Placement::Idle);
        let volume = mgr.tile(&id("volume")).unwrap();
        assert!(!volume.is_open && !volume.is_floating);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn docking_the_placing_tile_ends_placement() {
        let mut mgr = TilingManager::default();
        mgr.toggle(&id("volume"));
        assert!(mgr.drop_tile(&id("volume"), Some(id("pending")), DockDirection::Bottom));
        assert_eq!(mgr.placement(), &Placement::Idle);
        assert_eq!(grid(&mgr, "pending"), GridRect::new(16.0, 0.0, 8.0, 12.0));
        assert_eq!(grid(&mgr, "volume"), GridRect::new(16.0, 12.0, 8.0, 12.0));
        assert!(!mgr.tile(&id("volume")).unwrap().is_floating);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn rejected_dock_keeps_placing() {
        let mut mgr = TilingManager::default();
        mgr.toggle(&id("volume"));
        assert!(!mgr.drop_tile(&id("volume"), Some(id("draws")), DockDirection::Left));
        assert_eq!(mgr.placement().placing(), Some(&id("volume")));
    }

    #[test]
    fn center_drop_from_float_displaces_target() {
        let mut mgr = TilingManager::default();
        mgr.toggle(&id("volume"));
        assert!(mgr.drop_tile(&id("volume"), Some(id("pending")), DockDirection::Center));
        let pending = mgr.tile(&id("pending")).unwrap();
        assert!(pending.is_floating && pending.is_open);
        assert_eq!(pending.z_index, 12);
        assert_eq!(grid(&mgr, "volume"), GridRect::new(16.0, 0.0, 8.0, 24.0));
        assert_eq!(mgr.placement(), &Placement::Idle);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn closing_tiled_tile_fills_gap() {
        let mut mgr = TilingManager::default();
        assert!(mgr.toggle(&id("quick_menu")));
        assert_eq!(grid(&mgr, "donations"), GridRect::new(0.0, 0.0, 16.0, 24.0));
        assert!(!mgr.tile(&id("quick_menu")).unwrap().is_open);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn last_tile_closes_and_reopens_full_grid() {
        let mut mgr = TilingManager::default();
        mgr.toggle(&id("quick_menu"));
        mgr.toggle(&id("pending"));
        assert_eq!(grid(&mgr, "donations"), GridRect::new(0.0, 0.0, 24.0, 24.0));

        assert!(mgr.toggle(&id("donations")));
        assert!(mgr.tiles().iter().all(|t| !t.is_open));

        assert!(mgr.toggle(&id("vote")));
        let vote = mgr.tile(&id("vote")).unwrap();
        assert!(vote.is_open && !vote.is_floating);
        assert_eq!(vote.grid, GridRect::new(0.0, 0.0, 24.0, 24.0));
        assert_eq!(vote.z_index, 10);
        assert_eq!(mgr.placement(), &Placement::Idle);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn toggle_unknown_tile_is_rejected() {
        let mut mgr = TilingManager::default();
        assert!(!mgr.toggle(&id("chat")));
    }

    #[test]
    fn drop_without_target_snaps_back() {
        let mut mgr = TilingManager::default();
        let home = mgr.tile(&id("donations")).unwrap().rect;
        assert!(mgr.move_tile(&id("donations"), 300.0, 300.0));
        assert_eq!(mgr.drag().dragging, Some(id("donations")));
        assert_eq!(mgr.tile(&id("donations")).unwrap().rect.x, 300.0);

        assert!(!mgr.drop_tile(&id("donations"), None, DockDirection::None));
        assert_eq!(mgr.tile(&id("donations")).unwrap().rect, home);
        assert_eq!(mgr.drag(), &DragState::default());
    }

    #[test]
    fn drop_uses_recorded_hover() {
        let mut mgr = TilingManager::default();
        assert!(mgr.hover(Some(id("pending")), DockDirection::Left));
        assert!(!mgr.hover(Some(id("pending")), DockDirection::Left));
        assert!(mgr.drop_hovered(&id("quick_menu")));
        assert_eq!(grid(&mgr, "donations"), GridRect::new(0.0, 0.0, 16.0, 24.0));
        assert_eq!(grid(&mgr, "quick_menu"), GridRect::new(16.0, 0.0, 4.0, 24.0));
        assert_eq!(grid(&mgr, "pending"), GridRect::new(20.0, 0.0, 4.0, 24.0));
        assert_eq!(mgr.drag().hovered, None);
        assert!(mgr.is_consistent());
    }

    #[test]
    fn resize_moves_connected_seam() {
        let mut mgr = TilingManager::default();
        let rect = pixels(&mgr, GridRect::new(0.0, 0.0, 18.0, 16.0));
        assert!(mgr.resize(&id("donations"), rect));
        assert!(mgr.resize_end());
        assert_eq!(grid(&mgr, "donations"), GridRect::new(0.0, 0.0, 18.0, 16.0));
        assert_eq!(grid(&mgr, "quick_menu"), GridRect::new(0.0, 16.0, 18.0, 8.0));
        assert_eq!(grid(&mgr, "pending"), GridRect::new(18.0, 0.0, 6.0, 24.0));
        assert!(mgr.is_consistent());
    }

    #[test]
    fn resizable_edges_of_default_layout() {
        let mgr = TilingManager::default();
        let edges = mgr.resizable_edges(&id("quick_menu")).unwrap();
        assert!(edges.top && edges.right && !edges.bottom && !edges.left);
        assert!(mgr.resizable_edges(&id("chat")).is_none());
    }

    #[test]
    fn focus_raises_floating_tile() {
        let mut tiles = default_tiles();
        for (name, z) in [("volume", 11), ("vote", 12)] {
            let t = tiles.iter_mut().find(|t| t.id.as_str() == name).unwrap();
            t.is_open = true;
            t.is_floating = true;
            t.z_index = z;
        }
        let mut mgr = TilingManager::with_state(
            LayoutEngine::default(),
            1920.0,
            1080.0,
            tiles,
            PresetStore::new(),
        );

        assert!(mgr.focus(&id("volume")));
        assert_eq!(mgr.tile(&id("volume")).unwrap().z_index, 13);
        assert_eq!(mgr.focused_id(), Some(&id("volume")));

        assert!(mgr.focus(&id("donations")));
        assert_eq!(mgr.tile(&id("donations")).unwrap().z_index, 10);
        assert!(!mgr.focus(&id("draws")));
    }

    #[test]
    fn viewport_change_reprojects() {
        let mut mgr = TilingManager::default();
        assert!(!mgr.set_viewport(10.0, 10.0));
        assert!(mgr.set_viewport(976.0, 496.0));
        let donations = mgr.tile(&id("donations")).unwrap();
        assert_eq!(donations.rect, Rect::new(8.0, 8.0, 634.0, 314.0));
    }

    #[test]
    fn load_preset_restores_snapshot_and_ends_placement() {
        let mut mgr = TilingManager::default();
        let preset = mgr.save_preset("Main", "star");
        let snapshot = mgr.tiles().to_vec();

        mgr.toggle(&id("volume"));
        assert!(mgr.placement().is_active());

        assert!(mgr.load_preset(&preset));
        assert_eq!(mgr.placement(), &Placement::Idle);
        assert_eq!(mgr.tiles(), snapshot.as_slice());
        assert_eq!(mgr.presets().active_id(), Some(&preset));
        assert!(!mgr.load_preset(&PresetId::from("missing")));
    }

    #[test]
    fn update_preset_needs_active() {
        let mut mgr = TilingManager::default();
        assert!(!mgr.update_preset());
        let preset = mgr.save_preset("Main", "");
        mgr.toggle(&id("quick_menu"));
        assert!(mgr.update_preset());
        let saved = mgr.presets().get(&preset).unwrap();
        assert!(!saved.tiles.iter().any(|t| t.id.as_str() == "quick_menu" && t.is_open));
    }

    #[test]
    fn reset_restores_catalog() {
        let mut mgr = TilingManager::default();
        mgr.save_preset("Main", "");
        mgr.toggle(&id("quick_menu"));
        mgr.toggle(&id("volume"));
        assert!(mgr.reset_layout());
        assert_eq!(mgr.tiles(), TilingManager::default().tiles());
        assert_eq!(mgr.presets().active_id(), None);
        assert_eq!(mgr.presets().len(), 1);
        assert_eq!(mgr.placement(), &Placement::Idle);
    }

    #[test]
    fn from_persisted_merges_over_catalog() {
        let persisted = vec![
            PersistedTile {
                id: "quick_menu".into(),
                is_open: Some(false),
                ..PersistedTile::default()
            },
            PersistedTile {
                id: "donations".into(),
                gh: Some(24.0),
                ..PersistedTile::default()
            },
        ];
        let mgr = TilingManager::from_persisted(
            LayoutEngine::default(),
            1920.0,
            1080.0,
            &persisted,
            PresetStore::new(),
        );
        assert_eq!(grid(&mgr, "donations"), GridRect::new(0.0, 0.0, 16.0, 24.0));
        assert!(mgr.is_consistent());
    }

    #[test]
    fn restored_placement_keeps_the_lock() {
        let mut first = TilingManager::default();
        first.toggle(&id("volume"));
        let saved = first.placement().clone();

        let mut mgr = TilingManager::with_state(
            LayoutEngine::default(),
            1920.0,
            1080.0,
            first.tiles().to_vec(),
            PresetStore::new(),
        )
        .with_placement(saved);
        assert_eq!(mgr.placement().placing(), Some(&id("volume")));
        assert!(!mgr.toggle(&id("draws")));
        assert!(!mgr.tile(&id("draws")).unwrap().is_open);
        assert!(mgr.drop_tile(&id("volume"), Some(id("pending")), DockDirection::Bottom));
        assert_eq!(mgr.placement(), &Placement::Idle);
    }

    #[test]
    fn stale_placement_is_dropped() {
        let mgr = TilingManager::default().with_placement(Placement::Placing(id("volume")));
        assert_eq!(mgr.placement(), &Placement::Idle);

        let mgr = TilingManager::default().with_placement(Placement::Placing(id("donations")));
        assert_eq!(mgr.placement(), &Placement::Idle);

        let mgr = TilingManager::default().with_placement(Placement::Placing(id("chat")));
        assert_eq!(mgr.placement(), &Placement::Idle);
    }

    #[test]
    fn execute_command_sequence_keeps_mosaic() {
        let mut mgr = TilingManager::default();
        let m = mgr.clone();
        let rect = pixels(&m, GridRect::new(0.0, 0.0, 20.0, 12.0));

        let steps = vec![
            TilingCommand::Toggle(id("quick_menu")),
            TilingCommand::Toggle(id("volume")),
            TilingCommand::Drop {
                id: id("volume"),
                target: Some(id("donations")),
                direction: DockDirection::Bottom,
            },
            TilingCommand::Toggle(id("vote")),
            TilingCommand::Drop {
                id: id("vote"),
                target: Some(id("pending")),
                direction: DockDirection::Top,
            },
            TilingCommand::Resize {
                id: id("donations"),
                rect,
            },
            TilingCommand::ResizeEnd,
            TilingCommand::Toggle(id("donations")),
        ];
        for cmd in steps {
            assert!(mgr.execute(cmd.clone()), "{cmd:?} was rejected");
            assert!(mgr.is_consistent(), "mosaic broken after {cmd:?}");
        }
        assert_eq!(grid(&mgr, "vote"), GridRect::new(0.0, 0.0, 24.0, 12.0));

        assert!(mgr.execute(TilingCommand::ResetLayout));
        assert!(mgr.is_consistent());
    }

    #[test]
    fn execute_preset_commands() {
        let mut mgr = TilingManager::default();
        assert!(mgr.execute(TilingCommand::SavePreset {
            name: "Main".into(),
            icon: "star".into(),
        }));
        let preset = mgr.presets().list()[0].id.clone();
        assert!(mgr.execute(TilingCommand::RenamePreset {
            id: preset.clone(),
            name: "Evening".into(),
        }));
        assert_eq!(mgr.presets().list()[0].name, "Evening");
        assert!(mgr.execute(TilingCommand::UpdatePreset));
        assert!(mgr.execute(TilingCommand::LoadPreset(preset.clone())));
        assert!(mgr.execute(TilingCommand::DeletePreset(preset.clone())));
        assert!(!mgr.execute(TilingCommand::DeletePreset(preset)));
        assert!(mgr.presets().is_empty());
    }

    #[test]
    fn commands_round_trip_through_json() {
        let cmd = TilingCommand::Drop {
            id: id("vote"),
            target: Some(id("pending")),
            direction: DockDirection::Left,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"drop\""));
        let back: TilingCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
