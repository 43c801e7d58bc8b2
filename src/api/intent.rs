use serde::{Deserialize, Serialize};

use crate::core::AggregationMode;

use super::{ConversionChart, ToggleOutcome};

/// User intent emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ChartIntent {
    ToggleVariant(String),
    SetAggregationMode(AggregationMode),
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    ResetViewport,
}

/// What an applied intent changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    SelectionChanged,
    SelectionRejected(ToggleOutcome),
    /// Points were rebuilt and the viewport reset.
    SeriesRebuilt,
    ViewportChanged,
    Unchanged,
}

impl IntentOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(
            self,
            Self::SelectionChanged | Self::SeriesRebuilt | Self::ViewportChanged
        )
    }
}

impl ConversionChart {
    /// Dispatches one intent to the matching operation.
    pub fn apply(&mut self, intent: &ChartIntent) -> IntentOutcome {
        let viewport_changed = match intent {
            ChartIntent::ToggleVariant(key) => {
                let outcome = self.toggle_variant(key);
                return if outcome.changed() {
                    IntentOutcome::SelectionChanged
                } else {
                    IntentOutcome::SelectionRejected(outcome)
                };
            }
            ChartIntent::SetAggregationMode(mode) => {
                return if self.set_aggregation_mode(*mode) {
                    IntentOutcome::SeriesRebuilt
                } else {
                    IntentOutcome::Unchanged
                };
            }
            ChartIntent::ZoomIn => self.zoom_in(),
            ChartIntent::ZoomOut => self.zoom_out(),
            ChartIntent::PanLeft => self.pan_left(),
            ChartIntent::PanRight => self.pan_right(),
            ChartIntent::ResetViewport => self.reset_viewport(),
        };

        if viewport_changed {
            IntentOutcome::ViewportChanged
        } else {
            IntentOutcome::Unchanged
        }
    }
}
