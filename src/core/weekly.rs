use crate::core::{AggregationMode, ConversionRate, ParsedRecord, Variant, VariantMap};

/// Number of consecutive records folded into one weekly bucket.
pub const WEEKLY_BUCKET_LEN: usize = 7;

/// Separator between the first and last date of a bucket label.
pub const DATE_RANGE_SEPARATOR: &str = " – ";

/// Folds daily records into index-based buckets of seven.
///
/// Buckets are positional, not calendar-aligned: record `i` lands in bucket
/// `i / 7` regardless of weekday. The trailing bucket keeps whatever remains.
/// Counts are summed per variant before the rate is recomputed, so a bucket
/// rate is never an average of daily rates.
#[must_use]
pub fn aggregate_weekly(parsed: &[ParsedRecord], variants: &[Variant]) -> Vec<ParsedRecord> {
    parsed
        .chunks(WEEKLY_BUCKET_LEN)
        .filter_map(|bucket| fold_bucket(bucket, variants))
        .collect()
}

fn fold_bucket(bucket: &[ParsedRecord], variants: &[Variant]) -> Option<ParsedRecord> {
    let first = bucket.first()?;
    let last = bucket.last()?;

    let mut visits = VariantMap::with_capacity(variants.len());
    let mut conversions = VariantMap::with_capacity(variants.len());
    let mut conversion_rate = VariantMap::with_capacity(variants.len());

    for variant in variants {
        let key = variant.key.as_str();
        // Seven `u64` counts always fit in `u128`.
        let (visits_sum, conversions_sum) = bucket.iter().fold((0u128, 0u128), |acc, item| {
            (
                acc.0 + u128::from(item.visits.value(key).unwrap_or(0)),
                acc.1 + u128::from(item.conversions.value(key).unwrap_or(0)),
            )
        });
        visits.insert(key, saturate(visits_sum));
        conversions.insert(key, saturate(conversions_sum));
        conversion_rate.insert(key, bucket_rate(visits_sum, conversions_sum));
    }

    Some(ParsedRecord {
        date: format!("{}{DATE_RANGE_SEPARATOR}{}", first.date, last.date),
        date_value: first.date_value,
        visits,
        conversions,
        conversion_rate,
    })
}

fn saturate(total: u128) -> u64 {
    u64::try_from(total).unwrap_or(u64::MAX)
}

fn bucket_rate(visits: u128, conversions: u128) -> ConversionRate {
    if visits == 0 {
        return ConversionRate::Absent;
    }
    ConversionRate::Present(conversions as f64 / visits as f64 * 100.0)
}

/// Returns the record sequence backing the given aggregation mode.
#[must_use]
pub fn select_source(
    parsed: &[ParsedRecord],
    variants: &[Variant],
    mode: AggregationMode,
) -> Vec<ParsedRecord> {
    match mode {
        AggregationMode::Daily => parsed.to_vec(),
        AggregationMode::Weekly => aggregate_weekly(parsed, variants),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::aggregate_weekly;
    use crate::core::{ConversionRate, RawDailyRecord, RawVariant, build_variants, parse_raw};

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("date") + chrono::Days::new(offset)
    }

    #[test]
    fn trailing_bucket_keeps_remaining_records() {
        let variants = build_variants(&[RawVariant::control("Original")]);
        let raw: Vec<RawDailyRecord> = (0..9)
            .map(|i| RawDailyRecord::new(day(i)).with_counts("0", 10, 1))
            .collect();
        let weekly = aggregate_weekly(&parse_raw(&raw, &variants), &variants);

        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[1].visits.value("0"), Some(20));
        assert_eq!(weekly[1].date, "2025-01-08 – 2025-01-09");
        assert_eq!(weekly[1].date_value, day(7));
    }

    #[test]
    fn all_zero_bucket_is_absent() {
        let variants = build_variants(&[RawVariant::control("Original")]);
        let raw = vec![
            RawDailyRecord::new(day(0)).with_counts("0", 0, 0),
            RawDailyRecord::new(day(1)),
        ];
        let weekly = aggregate_weekly(&parse_raw(&raw, &variants), &variants);

        assert_eq!(weekly[0].rate("0"), ConversionRate::Absent);
        assert_eq!(weekly[0].visits.value("0"), Some(0));
    }

    #[test]
    fn missing_conversions_count_as_zero_once_summed() {
        let variants = build_variants(&[RawVariant::control("Original")]);
        let mut record = RawDailyRecord::new(day(0));
        record.visits.insert("0", 50);
        let parsed = parse_raw(&[record], &variants);
        assert_eq!(parsed[0].rate("0"), ConversionRate::Absent);

        let weekly = aggregate_weekly(&parsed, &variants);
        assert_eq!(weekly[0].rate("0"), ConversionRate::Present(0.0));
    }

    #[test]
    fn near_max_daily_counts_sum_without_overflow() {
        let variants = build_variants(&[RawVariant::control("Original")]);
        let raw = vec![
            RawDailyRecord::new(day(0)).with_counts("0", u64::MAX, u64::MAX),
            RawDailyRecord::new(day(1)).with_counts("0", 2, 0),
        ];
        let weekly = aggregate_weekly(&parse_raw(&raw, &variants), &variants);

        assert_eq!(weekly[0].visits.value("0"), Some(u64::MAX));
        assert_eq!(weekly[0].conversions.value("0"), Some(u64::MAX));
        let rate = weekly[0].rate("0").value().expect("present rate");
        assert!(rate.is_finite());
        assert!(rate > 99.0 && rate <= 100.0);
    }
}
