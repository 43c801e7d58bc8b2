use serde::{Deserialize, Serialize};

use crate::core::{AggregationMode, ParsedRecord, Variant};

/// Whether a detail covers one day or a multi-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    Day,
    Period,
}

impl From<AggregationMode> for PeriodKind {
    fn from(mode: AggregationMode) -> Self {
        match mode {
            AggregationMode::Daily => Self::Day,
            AggregationMode::Weekly => Self::Period,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDetailRow {
    pub key: String,
    pub name: String,
    pub conversion_rate: f64,
    pub visits: u64,
    pub conversions: u64,
}

/// Per-point breakdown handed to tooltip renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDetail {
    pub date: String,
    pub period_kind: PeriodKind,
    pub rows: Vec<PointDetailRow>,
}

/// Looks up the record at `sequence_index` and lists the selected variants
/// that have a rate there, in selection order.
///
/// Missing counters are reported as zero. Returns `None` for an index outside
/// `source`.
#[must_use]
pub fn point_detail<S: AsRef<str>>(
    source: &[ParsedRecord],
    variants: &[Variant],
    selected_keys: &[S],
    mode: AggregationMode,
    sequence_index: usize,
) -> Option<PointDetail> {
    let record = source.get(sequence_index)?;
    let rows = selected_keys
        .iter()
        .filter_map(|key| {
            let key = key.as_ref();
            let variant = variants.iter().find(|variant| variant.key == key)?;
            let conversion_rate = record.rate(key).value()?;
            Some(PointDetailRow {
                key: key.to_owned(),
                name: variant.name.clone(),
                conversion_rate,
                visits: record.visits.value(key).unwrap_or(0),
                conversions: record.conversions.value(key).unwrap_or(0),
            })
        })
        .collect();

    Some(PointDetail {
        date: record.date.clone(),
        period_kind: mode.into(),
        rows,
    })
}

impl super::ConversionChart {
    /// Detail for the active point at `sequence_index`.
    #[must_use]
    pub fn point_detail(&self, sequence_index: usize) -> Option<PointDetail> {
        point_detail(
            self.source_records(),
            self.variants(),
            self.selected_keys(),
            self.mode,
            sequence_index,
        )
    }
}
