use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    AggregationMode, ConversionRate, ParsedRecord, Variant, VariantMap, ViewportWindow,
};

/// Appended to weekly labels to mark a multi-day bucket.
pub const CONTINUATION_MARKER: char = '…';

/// Flat, index-tagged point consumed by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub display_label: String,
    /// Position of this point in the sequence it was built from.
    pub sequence_index: usize,
    pub values: VariantMap<ConversionRate>,
}

impl ChartPoint {
    #[must_use]
    pub fn value(&self, key: &str) -> ConversionRate {
        self.values.value(key).unwrap_or(ConversionRate::Absent)
    }
}

/// Formats a date as zero-padded `DD.MM`.
#[must_use]
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// Projects parsed records into chart points, one per record.
///
/// `sequence_index` mirrors the record position exactly so detail lookups can
/// index back into `source`. The function is deterministic.
#[must_use]
pub fn build_chart_points(
    source: &[ParsedRecord],
    variants: &[Variant],
    mode: AggregationMode,
) -> Vec<ChartPoint> {
    source
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut display_label = format_day_month(record.date_value);
            if mode == AggregationMode::Weekly {
                display_label.push(CONTINUATION_MARKER);
            }

            ChartPoint {
                date: record.date.clone(),
                display_label,
                sequence_index: index,
                values: variants
                    .iter()
                    .map(|variant| (variant.key.as_str(), record.rate(&variant.key)))
                    .collect(),
            }
        })
        .collect()
}

/// Returns the points covered by `window`, clamped to the sequence bounds.
#[must_use]
pub fn visible_points(points: &[ChartPoint], window: ViewportWindow) -> &[ChartPoint] {
    if window.start_index >= points.len() {
        return &[];
    }
    let end = window.end_index.min(points.len() - 1);
    if window.start_index > end {
        return &[];
    }
    &points[window.start_index..=end]
}
