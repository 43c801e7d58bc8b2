use tracing::debug;

use crate::core::{AggregationMode, RawPayload, VariantRegistry, build_chart_points, parse_raw};

use super::{ConversionChart, VariantSelection, pipeline_cache::PipelineCache};

impl ConversionChart {
    /// Replaces the whole dataset.
    ///
    /// Rebuilds the registry and parsed series, selects every variant, and
    /// resets the viewport to the full range.
    pub fn load_payload(&mut self, payload: &RawPayload) {
        self.registry = VariantRegistry::from_raw(&payload.variants);
        let daily = parse_raw(&payload.data, self.registry.as_slice());
        debug!(
            variant_count = self.registry.len(),
            record_count = daily.len(),
            "loaded raw payload"
        );
        self.pipeline = PipelineCache::new(daily);
        self.selection = VariantSelection::all(&self.registry);
        self.rebuild_points();
        self.viewport.resize(self.points.len());
        self.viewport.reset();
    }

    /// Switches granularity and resets the viewport to the full range.
    ///
    /// Returns `false` when `mode` is already active.
    pub fn set_aggregation_mode(&mut self, mode: AggregationMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.rebuild_points();
        self.viewport.resize(self.points.len());
        self.viewport.reset();
        true
    }

    fn rebuild_points(&mut self) {
        let variants = self.registry.as_slice();
        let source = self.pipeline.source(self.mode, variants);
        self.points = build_chart_points(source, variants, self.mode);
        debug!(
            mode = ?self.mode,
            point_count = self.points.len(),
            "rebuilt chart points"
        );
    }
}
