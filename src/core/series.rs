use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{ConversionRate, Variant, VariantMap};

/// One day of raw per-variant counters. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDailyRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub visits: VariantMap<u64>,
    #[serde(default)]
    pub conversions: VariantMap<u64>,
}

impl RawDailyRecord {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            visits: VariantMap::new(),
            conversions: VariantMap::new(),
        }
    }

    /// Records counters for one variant on this day.
    #[must_use]
    pub fn with_counts(mut self, key: &str, visits: u64, conversions: u64) -> Self {
        self.visits.insert(key, visits);
        self.conversions.insert(key, conversions);
        self
    }
}

/// Derived record for a single day or for a bucket of consecutive days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// ISO date for daily records, `"<first> – <last>"` for buckets.
    pub date: String,
    /// Anchor date: the day itself, or the first day of a bucket.
    pub date_value: NaiveDate,
    pub visits: VariantMap<u64>,
    pub conversions: VariantMap<u64>,
    pub conversion_rate: VariantMap<ConversionRate>,
}

impl ParsedRecord {
    #[must_use]
    pub fn rate(&self, key: &str) -> ConversionRate {
        self.conversion_rate
            .value(key)
            .unwrap_or(ConversionRate::Absent)
    }
}

#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses raw daily records one-to-one, computing per-variant rates.
///
/// Input order is kept as-is: records are neither sorted nor deduplicated,
/// so callers supply them chronologically.
#[must_use]
pub fn parse_raw(records: &[RawDailyRecord], variants: &[Variant]) -> Vec<ParsedRecord> {
    records
        .iter()
        .map(|record| ParsedRecord {
            date: format_iso_date(record.date),
            date_value: record.date,
            visits: record.visits.clone(),
            conversions: record.conversions.clone(),
            conversion_rate: variants
                .iter()
                .map(|variant| {
                    let rate = ConversionRate::from_counts(
                        record.visits.value(&variant.key),
                        record.conversions.value(&variant.key),
                    );
                    (variant.key.as_str(), rate)
                })
                .collect(),
        })
        .collect()
}
