use serde::{Deserialize, Serialize};

use crate::core::{AggregationMode, ViewportPolicy};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can ship chart setup alongside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionChartConfig {
    #[serde(default)]
    pub viewport_policy: ViewportPolicy,
    #[serde(default)]
    pub initial_mode: AggregationMode,
}

impl ConversionChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_viewport_policy(mut self, policy: ViewportPolicy) -> Self {
        self.viewport_policy = policy;
        self
    }

    #[must_use]
    pub fn with_initial_mode(mut self, mode: AggregationMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport_policy.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}
