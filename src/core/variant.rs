use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key reserved for the control arm, which arrives without an id.
pub const CONTROL_VARIANT_KEY: &str = "0";

/// Variant entry as it appears in the raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawVariant {
    #[must_use]
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub fn control(name: impl Into<String>) -> Self {
        Self::new(None, name)
    }
}

/// One experiment arm with its canonical key and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: Option<i64>,
    pub key: String,
    pub name: String,
}

/// Normalizes raw variants into keyed variants, preserving length and order.
///
/// Order is significant for consumers: it drives default selection order and
/// series colour assignment.
#[must_use]
pub fn build_variants(raw: &[RawVariant]) -> Vec<Variant> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| Variant {
            id: entry.id,
            key: entry
                .id
                .map_or_else(|| CONTROL_VARIANT_KEY.to_owned(), |id| id.to_string()),
            name: display_name(entry.name.as_deref(), index),
        })
        .collect()
}

fn display_name(name: Option<&str>, index: usize) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ if index == 0 => "Original".to_owned(),
        _ => format!("Variation {index}"),
    }
}

/// Immutable, ordered set of variants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
}

impl VariantRegistry {
    #[must_use]
    pub fn from_raw(raw: &[RawVariant]) -> Self {
        let variants = build_variants(raw);
        for (index, variant) in variants.iter().enumerate() {
            if variants[..index].iter().any(|v| v.key == variant.key) {
                warn!(
                    key = %variant.key,
                    "duplicate variant key; lookups resolve to the first entry"
                );
            }
        }
        Self { variants }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|variant| variant.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{RawVariant, VariantRegistry, build_variants};

    #[test]
    fn missing_id_maps_to_control_key() {
        let variants = build_variants(&[
            RawVariant::control("Original"),
            RawVariant::new(Some(10001), "B"),
        ]);
        assert_eq!(variants[0].key, "0");
        assert_eq!(variants[1].key, "10001");
    }

    #[test]
    fn empty_names_fall_back_to_positional_defaults() {
        let raw = vec![
            RawVariant { id: None, name: None },
            RawVariant::new(Some(1), ""),
            RawVariant { id: Some(2), name: None },
        ];
        let names: Vec<String> = build_variants(&raw).into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Original", "Variation 1", "Variation 2"]);
    }

    #[test]
    fn registry_lookup_resolves_first_duplicate() {
        let registry =
            VariantRegistry::from_raw(&[RawVariant::control("A"), RawVariant::control("B")]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("0").map(|v| v.name.as_str()), Some("A"));
    }
}
