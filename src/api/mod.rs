mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod intent;
mod interaction_controller;
mod json_contract;
mod pipeline_cache;
mod point_detail;
mod selection;

pub use engine::ConversionChart;
pub use engine_config::ConversionChartConfig;
pub use engine_snapshot::ChartSnapshot;
pub use intent::{ChartIntent, IntentOutcome};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use point_detail::{PeriodKind, PointDetail, PointDetailRow, point_detail};
pub use selection::{ToggleOutcome, VariantSelection};
