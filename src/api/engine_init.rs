use crate::core::{RawPayload, VariantRegistry, ViewportController};
use crate::error::ChartResult;

use super::{
    ConversionChart, ConversionChartConfig, VariantSelection, pipeline_cache::PipelineCache,
};

impl ConversionChart {
    /// Creates an empty chart: no variants, no points, `{0, 0}` window.
    pub fn new(config: ConversionChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            registry: VariantRegistry::default(),
            pipeline: PipelineCache::default(),
            mode: config.initial_mode,
            points: Vec::new(),
            selection: VariantSelection::default(),
            viewport: ViewportController::new(0, config.viewport_policy),
        })
    }

    /// Creates a chart and loads `payload` into it.
    pub fn from_payload(payload: &RawPayload, config: ConversionChartConfig) -> ChartResult<Self> {
        let mut chart = Self::new(config)?;
        chart.load_payload(payload);
        Ok(chart)
    }

    /// Decodes a JSON payload and loads it into a new chart.
    pub fn from_json_str(input: &str, config: ConversionChartConfig) -> ChartResult<Self> {
        let payload = RawPayload::from_json_str(input)?;
        Self::from_payload(&payload, config)
    }
}
