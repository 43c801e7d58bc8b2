use crate::core::ChartPoint;

/// Fraction of the observed span added above and below the value range.
pub const VALUE_DOMAIN_PADDING_RATIO: f64 = 0.1;

/// Domain used when no selected variant has a present value in range.
pub const EMPTY_VALUE_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Fits a padded value axis over the present rates of `selected_keys`.
///
/// A flat series gets a padding of `1.0`. The lower bound never drops below
/// zero since rates are non-negative.
#[must_use]
pub fn value_domain<S: AsRef<str>>(visible: &[ChartPoint], selected_keys: &[S]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for point in visible {
        for key in selected_keys {
            if let Some(value) = point.value(key.as_ref()).value() {
                min = min.min(value);
                max = max.max(value);
            }
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return EMPTY_VALUE_DOMAIN;
    }

    let span_padding = (max - min) * VALUE_DOMAIN_PADDING_RATIO;
    let padding = if span_padding == 0.0 { 1.0 } else { span_padding };
    ((min - padding).max(0.0), max + padding)
}
