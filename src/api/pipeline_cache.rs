use tracing::debug;

use crate::core::{AggregationMode, ParsedRecord, Variant, aggregate_weekly};

/// Parsed record sequences for one loaded payload.
///
/// Daily records are built eagerly; the weekly roll-up is computed on first
/// use and reused until the payload is replaced.
#[derive(Debug, Clone, Default)]
pub(super) struct PipelineCache {
    daily: Vec<ParsedRecord>,
    weekly: Option<Vec<ParsedRecord>>,
}

impl PipelineCache {
    pub(super) fn new(daily: Vec<ParsedRecord>) -> Self {
        Self {
            daily,
            weekly: None,
        }
    }

    pub(super) fn daily(&self) -> &[ParsedRecord] {
        &self.daily
    }

    /// Ensures the sequence for `mode` exists and returns it.
    pub(super) fn source(
        &mut self,
        mode: AggregationMode,
        variants: &[Variant],
    ) -> &[ParsedRecord] {
        match mode {
            AggregationMode::Daily => self.daily.as_slice(),
            AggregationMode::Weekly => {
                let daily = &self.daily;
                self.weekly
                    .get_or_insert_with(|| {
                        let weekly = aggregate_weekly(daily, variants);
                        debug!(
                            daily_count = daily.len(),
                            weekly_count = weekly.len(),
                            "built weekly aggregation"
                        );
                        weekly
                    })
                    .as_slice()
            }
        }
    }

    /// Returns the sequence for `mode` if it was already built.
    pub(super) fn cached(&self, mode: AggregationMode) -> Option<&[ParsedRecord]> {
        match mode {
            AggregationMode::Daily => Some(self.daily.as_slice()),
            AggregationMode::Weekly => self.weekly.as_deref(),
        }
    }
}
