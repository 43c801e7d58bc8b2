use serde::{Deserialize, Serialize};

use crate::core::{RawDailyRecord, RawVariant};
use crate::error::{ChartError, ChartResult};

/// Raw experiment payload as supplied by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPayload {
    #[serde(default, alias = "variations")]
    pub variants: Vec<RawVariant>,
    #[serde(default)]
    pub data: Vec<RawDailyRecord>,
}

impl RawPayload {
    #[must_use]
    pub fn new(variants: Vec<RawVariant>, data: Vec<RawDailyRecord>) -> Self {
        Self { variants, data }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse raw payload json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize raw payload: {e}")))
    }
}
