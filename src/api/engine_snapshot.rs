use serde::{Deserialize, Serialize};

use crate::core::{AggregationMode, ChartPoint, Variant, ViewportWindow};

use super::ConversionChart;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub mode: AggregationMode,
    pub total_points: usize,
    pub window: ViewportWindow,
    pub variants: Vec<Variant>,
    pub selected_keys: Vec<String>,
    pub visible_points: Vec<ChartPoint>,
    pub value_domain: (f64, f64),
}

impl ConversionChart {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            mode: self.mode,
            total_points: self.total_points(),
            window: self.viewport_window(),
            variants: self.variants().to_vec(),
            selected_keys: self.selected_keys().to_vec(),
            visible_points: self.visible_points().to_vec(),
            value_domain: self.value_domain(),
        }
    }
}
