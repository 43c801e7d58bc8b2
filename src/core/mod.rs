pub mod chart_point;
pub mod payload;
pub mod series;
pub mod types;
pub mod value_domain;
pub mod variant;
pub mod viewport;
pub mod weekly;

pub use chart_point::{
    CONTINUATION_MARKER, ChartPoint, build_chart_points, format_day_month, visible_points,
};
pub use payload::RawPayload;
pub use series::{ParsedRecord, RawDailyRecord, format_iso_date, parse_raw};
pub use types::{AggregationMode, ConversionRate, VariantMap};
pub use value_domain::value_domain;
pub use variant::{CONTROL_VARIANT_KEY, RawVariant, Variant, VariantRegistry, build_variants};
pub use viewport::{
    ViewportCommand, ViewportController, ViewportPolicy, ViewportTransition, ViewportWindow,
};
pub use weekly::{WEEKLY_BUCKET_LEN, aggregate_weekly, select_source};
