//! One CLI invocation: load state, apply a command, print and save.

use std::path::Path;

use mosaic_common::types::{PresetId, Rect, TileId};
use mosaic_common::{MosaicError, StoreError};
use mosaic_config::MosaicConfig;
use mosaic_tiling::{LayoutEngine, TilingCommand, TilingManager};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Args, Command, PresetAction};
use crate::{script, store};

/// Build the engine parameters from the `[grid]` and `[floating]` sections.
pub fn layout_engine(config: &MosaicConfig) -> LayoutEngine {
    LayoutEngine {
        margin: f64::from(config.grid.margin),
        gap: f64::from(config.grid.gap),
        min_w: config.grid.min_w,
        min_h: config.grid.min_h,
        float_width: f64::from(config.floating.width),
        float_height: f64::from(config.floating.height),
        ..LayoutEngine::default()
    }
}

/// Run the parsed command line against the persisted layout.
pub fn run(args: &Args, config: &MosaicConfig) -> mosaic_common::Result<()> {
    let state_path = match &args.state {
        Some(path) => path.clone(),
        None => config.state_path()?,
    };
    let (width, height) = match args.viewport {
        Some(v) => (v.width, v.height),
        None => (
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
        ),
    };

    let state = store::load(&state_path)?.unwrap_or_default();
    let mut mgr = TilingManager::from_persisted(
        layout_engine(config),
        width,
        height,
        &state.tiles,
        state.presets,
    )
    .with_placement(state.placement);

    let changed = apply(&mut mgr, &args.command)?;
    if changed {
        store::save(&state_path, &mgr)?;
    }
    Ok(())
}

/// Apply one CLI command, printing its result. Returns whether state changed.
fn apply(mgr: &mut TilingManager, command: &Command) -> mosaic_common::Result<bool> {
    let changed = match command {
        Command::Show => false,
        Command::Toggle { id } => {
            let id = known_tile(mgr, id)?;
            report(mgr.toggle(&id), "toggle")
        }
        Command::Focus { id } => {
            let id = known_tile(mgr, id)?;
            report(mgr.focus(&id), "focus")
        }
        Command::Dock {
            source,
            target,
            direction,
        } => {
            let source = known_tile(mgr, source)?;
            let target = known_tile(mgr, target)?;
            report(mgr.drop_tile(&source, Some(target), *direction), "dock")
        }
        Command::Resize {
            id,
            x,
            y,
            width,
            height,
        } => {
            let id = known_tile(mgr, id)?;
            let resized = mgr.resize(&id, Rect::new(*x, *y, *width, *height));
            mgr.resize_end();
            report(resized, "resize")
        }
        Command::Edges { id } => {
            let id = known_tile(mgr, id)?;
            if let Some(edges) = mgr.resizable_edges(&id) {
                print_json(&edges)?;
            }
            return Ok(false);
        }
        Command::Preset { action } => return apply_preset(mgr, action),
        Command::Reset => mgr.reset_layout(),
        Command::Run { script } => run_script(mgr, script)?,
    };
    print_json(&mgr.tiles())?;
    Ok(changed)
}

fn apply_preset(mgr: &mut TilingManager, action: &PresetAction) -> mosaic_common::Result<bool> {
    let changed = match action {
        PresetAction::Save { name, icon } => {
            let id = mgr.save_preset(name.as_str(), icon.as_str());
            println!("{id}");
            true
        }
        PresetAction::Update => report(mgr.update_preset(), "preset update"),
        PresetAction::Load { preset } => {
            let id = known_preset(mgr, preset)?;
            let loaded = mgr.load_preset(&id);
            print_json(&mgr.tiles())?;
            loaded
        }
        PresetAction::Delete { preset } => {
            let id = known_preset(mgr, preset)?;
            mgr.delete_preset(&id)
        }
        PresetAction::Rename { preset, name } => {
            let id = known_preset(mgr, preset)?;
            mgr.rename_preset(&id, name.as_str())
        }
        PresetAction::List => {
            let active = mgr.presets().active_id();
            for preset in mgr.presets().list() {
                let marker = if Some(&preset.id) == active { "*" } else { " " };
                let open = preset.tiles.iter().filter(|t| t.is_open).count();
                println!("{marker} {}  {}  ({open} open)", preset.id, preset.name);
            }
            false
        }
    };
    Ok(changed)
}

/// Execute every line of `path` in order, in one session.
fn run_script(mgr: &mut TilingManager, path: &Path) -> mosaic_common::Result<bool> {
    let text = std::fs::read_to_string(path)?;
    let mut changed = false;
    for (index, line) in text.lines().enumerate() {
        let lineno = index + 1;
        let cmd = script::parse_line(line)
            .map_err(|e| MosaicError::Other(format!("{}:{lineno}: {e}", path.display())))?;
        let Some(cmd) = cmd else {
            continue;
        };
        let cmd = resolve_preset_names(mgr, cmd);
        if mgr.execute(cmd) {
            changed = true;
        } else {
            warn!(line = lineno, "command rejected: {}", line.trim());
        }
    }
    info!(changed, "script finished");
    Ok(changed)
}

/// Scripts may name presets; map names to ids where the id is unknown.
fn resolve_preset_names(mgr: &TilingManager, cmd: TilingCommand) -> TilingCommand {
    let resolve = |id: PresetId| -> PresetId {
        if mgr.presets().get(&id).is_some() {
            return id;
        }
        mgr.presets()
            .find_by_name(id.as_str())
            .map(|p| p.id.clone())
            .unwrap_or(id)
    };
    match cmd {
        TilingCommand::LoadPreset(id) => TilingCommand::LoadPreset(resolve(id)),
        TilingCommand::DeletePreset(id) => TilingCommand::DeletePreset(resolve(id)),
        TilingCommand::RenamePreset { id, name } => TilingCommand::RenamePreset {
            id: resolve(id),
            name,
        },
        other => other,
    }
}

fn known_tile(mgr: &TilingManager, id: &str) -> mosaic_common::Result<TileId> {
    let id = TileId::from(id);
    match mgr.tile(&id) {
        Some(_) => Ok(id),
        None => Err(MosaicError::UnknownTile(id.to_string())),
    }
}

fn known_preset(mgr: &TilingManager, key: &str) -> mosaic_common::Result<PresetId> {
    let store = mgr.presets();
    store
        .get(&PresetId::from(key))
        .or_else(|| store.find_by_name(key))
        .map(|p| p.id.clone())
        .ok_or_else(|| MosaicError::UnknownPreset(key.to_string()))
}

fn report(accepted: bool, what: &str) -> bool {
    if !accepted {
        warn!("{what} rejected, layout unchanged");
    }
    accepted
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> mosaic_common::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Encode(e.to_string()))?;
    println!("{json}");
    Ok(())
}
