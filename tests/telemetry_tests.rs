use conversion_chart::ConversionChart;
use conversion_chart::api::ConversionChartConfig;
use conversion_chart::telemetry::{init_default_tracing, init_tracing_with_filter};

#[test]
fn second_subscriber_install_is_refused() {
    let _ = init_default_tracing();
    assert!(!init_tracing_with_filter("debug"));

    // Events emitted after setup must not panic with or without a subscriber.
    let mut chart = ConversionChart::new(ConversionChartConfig::default()).expect("chart init");
    assert!(!chart.zoom_in());
}
