use tracing::warn;

use crate::core::ViewportCommand;

use super::{ConversionChart, ToggleOutcome};

impl ConversionChart {
    /// Shows or hides one variant. Hiding the last shown variant is rejected.
    pub fn toggle_variant(&mut self, key: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle(&self.registry, key);
        match outcome {
            ToggleOutcome::RejectedLastSelected => {
                warn!(key, "refusing to deselect the last selected variant");
            }
            ToggleOutcome::UnknownKey => {
                warn!(key, "ignoring toggle for unknown variant key");
            }
            ToggleOutcome::Selected | ToggleOutcome::Deselected => {}
        }
        outcome
    }

    /// Returns `true` when the window changed.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.apply(ViewportCommand::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.apply(ViewportCommand::ZoomOut)
    }

    pub fn pan_left(&mut self) -> bool {
        self.viewport.apply(ViewportCommand::PanLeft)
    }

    pub fn pan_right(&mut self) -> bool {
        self.viewport.apply(ViewportCommand::PanRight)
    }

    pub fn reset_viewport(&mut self) -> bool {
        self.viewport.apply(ViewportCommand::Reset)
    }
}
