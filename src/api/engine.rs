use crate::core::{
    AggregationMode, ChartPoint, ParsedRecord, Variant, VariantRegistry, ViewportController,
    ViewportPolicy, ViewportWindow, value_domain, visible_points,
};

use super::{ConversionChartConfig, VariantSelection, pipeline_cache::PipelineCache};

/// Main orchestration facade consumed by host applications.
///
/// `ConversionChart` owns the variant registry, the parsed series for the
/// loaded payload, the active aggregation mode, the variant selection, and
/// the viewport over the active chart-point sequence. Parsed data is never
/// mutated by intents; mode changes swap which sequence is active.
#[derive(Debug, Clone)]
pub struct ConversionChart {
    pub(super) config: ConversionChartConfig,
    pub(super) registry: VariantRegistry,
    pub(super) pipeline: PipelineCache,
    pub(super) mode: AggregationMode,
    pub(super) points: Vec<ChartPoint>,
    pub(super) selection: VariantSelection,
    pub(super) viewport: ViewportController,
}

impl ConversionChart {
    #[must_use]
    pub fn config(&self) -> ConversionChartConfig {
        self.config
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        self.registry.as_slice()
    }

    #[must_use]
    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    #[must_use]
    pub fn aggregation_mode(&self) -> AggregationMode {
        self.mode
    }

    /// Daily parsed records, regardless of the active mode.
    #[must_use]
    pub fn daily_records(&self) -> &[ParsedRecord] {
        self.pipeline.daily()
    }

    /// Parsed records backing the active chart points, indexed by
    /// `ChartPoint::sequence_index`.
    #[must_use]
    pub fn source_records(&self) -> &[ParsedRecord] {
        self.pipeline.cached(self.mode).unwrap_or(&[])
    }

    #[must_use]
    pub fn chart_points(&self) -> &[ChartPoint] {
        &self.points
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn selected_keys(&self) -> &[String] {
        self.selection.keys()
    }

    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.contains(key)
    }

    #[must_use]
    pub fn viewport_window(&self) -> ViewportWindow {
        self.viewport.window()
    }

    #[must_use]
    pub fn viewport_policy(&self) -> ViewportPolicy {
        self.viewport.policy()
    }

    /// Chart points inside the current viewport window.
    #[must_use]
    pub fn visible_points(&self) -> &[ChartPoint] {
        visible_points(&self.points, self.viewport.window())
    }

    /// Padded value axis over the visible points of the selected variants.
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        value_domain(self.visible_points(), self.selection.keys())
    }
}
