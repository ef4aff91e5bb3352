//! Command dispatch and viewport changes.

use tracing::{debug, warn};

use crate::commands::TilingCommand;

use super::TilingManager;

impl TilingManager {
    /// Execute a tiling command. Returns `true` if state changed.
    pub fn execute(&mut self, cmd: TilingCommand) -> bool {
        match cmd {
            TilingCommand::Toggle(id) => self.toggle(&id),
            TilingCommand::Focus(id) => self.focus(&id),
            TilingCommand::Move { id, x, y } => self.move_tile(&id, x, y),
            TilingCommand::Hover { target, direction } => self.hover(target, direction),
            TilingCommand::Drop {
                id,
                target,
                direction,
            } => self.drop_tile(&id, target, direction),
            TilingCommand::Resize { id, rect } => self.resize(&id, rect),
            TilingCommand::ResizeEnd => self.resize_end(),
            TilingCommand::SavePreset { name, icon } => {
                self.save_preset(name, icon);
                true
            }
            TilingCommand::UpdatePreset => self.update_preset(),
            TilingCommand::LoadPreset(id) => self.load_preset(&id),
            TilingCommand::DeletePreset(id) => self.delete_preset(&id),
            TilingCommand::RenamePreset { id, name } => self.rename_preset(&id, name),
            TilingCommand::ResetLayout => self.reset_layout(),
            TilingCommand::SetViewport { width, height } => self.set_viewport(width, height),
        }
    }

    /// Recompute cell metrics for a new viewport and re-project. A viewport
    /// too small to hold the margins is ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        let metrics = self.layout_engine.metrics(width, height);
        if !metrics.is_valid() {
            warn!(width, height, "ignoring viewport too small for the grid");
            return false;
        }
        self.metrics = metrics;
        self.reproject();
        debug!(width, height, "viewport updated");
        true
    }
}
