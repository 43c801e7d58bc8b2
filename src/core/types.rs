use indexmap::IndexMap;
use indexmap::map::{Iter, Keys};
use serde::{Deserialize, Serialize};

/// Per-variant mapping keyed by the canonical variant key.
///
/// Serialized as a plain JSON object (`{"0": 120, "10001": 98}`). Equality
/// ignores insertion order; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantMap<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for VariantMap<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> VariantMap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts or replaces the value for `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Keys<'_, String, T> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, T> {
        self.entries.iter()
    }
}

impl<T: Copy> VariantMap<T> {
    /// Returns a copy of the value stored for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<T> {
        self.entries.get(key).copied()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for VariantMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a VariantMap<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Conversion rate for one variant over one period.
///
/// `Absent` means "no data" and is never conflated with a zero rate.
/// On the wire a present rate is a number and an absent rate is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum ConversionRate {
    /// Percentage in `[0, 100]` for well-formed counts.
    Present(f64),
    Absent,
}

impl ConversionRate {
    /// Computes `conversions / visits * 100`.
    ///
    /// Yields `Absent` when visits are missing or zero, or when conversions
    /// are missing. Division by zero never happens.
    #[must_use]
    pub fn from_counts(visits: Option<u64>, conversions: Option<u64>) -> Self {
        match (visits, conversions) {
            (Some(visits), Some(conversions)) if visits > 0 => {
                Self::Present(conversions as f64 / visits as f64 * 100.0)
            }
            _ => Self::Absent,
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl From<Option<f64>> for ConversionRate {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) if value.is_finite() => Self::Present(value),
            _ => Self::Absent,
        }
    }
}

impl From<ConversionRate> for Option<f64> {
    fn from(rate: ConversionRate) -> Self {
        rate.value()
    }
}

/// Granularity of the derived series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Daily,
    Weekly,
}
