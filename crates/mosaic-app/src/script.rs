//! Line-oriented command scripts for `mosaic run`.
//!
//! One command per line, whitespace separated. Blank lines and lines
//! starting with `#` are skipped. Preset arguments may be an id or a name;
//! names are resolved against the store when the line executes.

use mosaic_common::types::{PresetId, Rect, TileId};
use mosaic_tiling::{DockDirection, TilingCommand};

/// Parse one script line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<TilingCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    let cmd = match words.as_slice() {
        ["toggle", id] => TilingCommand::Toggle(TileId::from(*id)),
        ["focus", id] => TilingCommand::Focus(TileId::from(*id)),
        ["move", id, x, y] => TilingCommand::Move {
            id: TileId::from(*id),
            x: number(x)?,
            y: number(y)?,
        },
        ["hover", "-"] => TilingCommand::Hover {
            target: None,
            direction: DockDirection::None,
        },
        ["hover", target, direction] => TilingCommand::Hover {
            target: Some(TileId::from(*target)),
            direction: direction.parse()?,
        },
        ["drop", id] => TilingCommand::Drop {
            id: TileId::from(*id),
            target: None,
            direction: DockDirection::None,
        },
        ["drop", id, target, direction] | ["dock", id, target, direction] => TilingCommand::Drop {
            id: TileId::from(*id),
            target: Some(TileId::from(*target)),
            direction: direction.parse()?,
        },
        ["resize", id, x, y, w, h] => TilingCommand::Resize {
            id: TileId::from(*id),
            rect: Rect::new(number(x)?, number(y)?, number(w)?, number(h)?),
        },
        ["resize-end"] => TilingCommand::ResizeEnd,
        ["preset", "save", name] => TilingCommand::SavePreset {
            name: name.to_string(),
            icon: String::new(),
        },
        ["preset", "save", name, icon] => TilingCommand::SavePreset {
            name: name.to_string(),
            icon: icon.to_string(),
        },
        ["preset", "update"] => TilingCommand::UpdatePreset,
        ["preset", "load", preset] => TilingCommand::LoadPreset(PresetId::from(*preset)),
        ["preset", "delete", preset] => TilingCommand::DeletePreset(PresetId::from(*preset)),
        ["preset", "rename", preset, name @ ..] if !name.is_empty() => TilingCommand::RenamePreset {
            id: PresetId::from(*preset),
            name: name.join(" "),
        },
        ["reset"] => TilingCommand::ResetLayout,
        ["viewport", w, h] => TilingCommand::SetViewport {
            width: number(w)?,
            height: number(h)?,
        },
        _ => return Err(format!("unrecognised command `{line}`")),
    };
    Ok(Some(cmd))
}

fn number(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("`{s}` is not a number"))
}
