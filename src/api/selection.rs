use serde::{Deserialize, Serialize};

use crate::core::VariantRegistry;

/// Outcome of toggling one variant key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The key is the only one selected and stays selected.
    RejectedLastSelected,
    /// The key is not part of the registry.
    UnknownKey,
}

impl ToggleOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Selected | Self::Deselected)
    }
}

/// Ordered set of variant keys currently shown.
///
/// Starts with every registered key; once non-empty it never becomes empty
/// through toggling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSelection {
    keys: Vec<String>,
}

impl VariantSelection {
    #[must_use]
    pub fn all(registry: &VariantRegistry) -> Self {
        let mut keys: Vec<String> = Vec::with_capacity(registry.len());
        for key in registry.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_owned());
            }
        }
        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Flips `key`; newly selected keys go to the end of the order.
    pub fn toggle(&mut self, registry: &VariantRegistry, key: &str) -> ToggleOutcome {
        if !registry.contains(key) {
            return ToggleOutcome::UnknownKey;
        }
        if let Some(position) = self.keys.iter().position(|k| k == key) {
            if self.keys.len() == 1 {
                return ToggleOutcome::RejectedLastSelected;
            }
            self.keys.remove(position);
            return ToggleOutcome::Deselected;
        }
        self.keys.push(key.to_owned());
        ToggleOutcome::Selected
    }
}
