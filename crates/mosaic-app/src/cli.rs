use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mosaic_config::validation::{VIEWPORT_MAX, VIEWPORT_MIN};
use mosaic_tiling::DockDirection;

/// Mosaic: grid tiling layout for a streamer widget dashboard.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Layout state file override.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Viewport size in pixels, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Log filter directive override (e.g. `debug`, `mosaic=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current tile list.
    Show,
    /// Open or close a widget.
    Toggle { id: String },
    /// Bring a widget to the front.
    Focus { id: String },
    /// Drop SOURCE onto TARGET at the given edge (top, bottom, left, right, center).
    Dock {
        source: String,
        target: String,
        direction: DockDirection,
    },
    /// Resize a widget to a pixel rect.
    Resize {
        id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Print which edges of a widget can be dragged.
    Edges { id: String },
    /// Manage saved layouts.
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// Restore the default layout.
    Reset,
    /// Apply a script of commands, one per line, in a single session.
    Run { script: PathBuf },
}

/// Presets are addressed by id or by name.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PresetAction {
    /// Save the current layout as a new preset.
    Save {
        name: String,
        #[arg(long, default_value = "")]
        icon: String,
    },
    /// Overwrite the active preset with the current layout.
    Update,
    Load { preset: String },
    Delete { preset: String },
    Rename { preset: String, name: String },
    List,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let range = f64::from(VIEWPORT_MIN)..=f64::from(VIEWPORT_MAX);
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| range.contains(n))
            .ok_or_else(|| {
                format!("viewport dimension `{v}` must be between {VIEWPORT_MIN} and {VIEWPORT_MAX}")
            })
    };
    Ok(Viewport {
        width: parse(w)?,
        height: parse(h)?,
    })
}

pub fn parse() -> Args {
    Args::parse()
}
