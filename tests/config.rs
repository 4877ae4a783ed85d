use signal_chart::config::{ChartConfig, DashboardConfig, SignalConfig};
use signal_chart::domain::errors::ErrorKind;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn empty_object_gives_defaults() {
    let config = DashboardConfig::from_json("{}").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.chart.bar_count, 50);
    assert_eq!(config.chart.ma_window, 10);
    assert_eq!(config.signals.tick_interval_ms, 15_000);
    assert_eq!(config.signals.history_capacity, 20);
}

#[wasm_bindgen_test]
fn partial_override_keeps_other_defaults() {
    let config = DashboardConfig::from_json(r#"{"chart": {"bar_count": 80}, "signals": {"open_hour": 8}}"#).unwrap();
    assert_eq!(config.chart.bar_count, 80);
    assert_eq!(config.chart.start_price, 1.0850);
    assert_eq!(config.signals.open_hour, 8);
    assert_eq!(config.signals.close_hour, 18);
}

#[test]
fn round_trips_through_json() {
    let config = DashboardConfig {
        chart: ChartConfig { seed_by_asset: true, ..ChartConfig::default() },
        signals: SignalConfig { payout_ratio: 0.9, ..SignalConfig::default() },
    };
    let json = config.to_json().unwrap();
    assert_eq!(DashboardConfig::from_json(&json).unwrap(), config);
}

#[test]
fn malformed_json_is_a_configuration_error() {
    let err = DashboardConfig::from_json("{ not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn inconsistent_values_rejected() {
    let cases = [
        r#"{"chart": {"bar_count": 0}}"#,
        r#"{"chart": {"ma_window": 51}}"#,
        r#"{"chart": {"start_price": -1.0}}"#,
        r#"{"signals": {"emission_probability": 1.5}}"#,
        r#"{"signals": {"open_hour": 18, "close_hour": 9}}"#,
        r#"{"signals": {"default_investment": -5.0}}"#,
        r#"{"signals": {"default_investment": 0.0}}"#,
        r#"{"signals": {"payout_ratio": -2.0}}"#,
        r#"{"signals": {"market_check_interval_ms": 0}}"#,
        r#"{"signals": {"history_capacity": 0}}"#,
        r#"{"signals": {"default_investment": -5.0, "emission_probability": 1.0, "payout_ratio": -2.0}}"#,
        r#"{"chart": {"margin": -1.0}}"#,
    ];
    for case in cases {
        let err = DashboardConfig::from_json(case).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration, "{}", case);
    }
}

#[test]
fn non_finite_numbers_rejected() {
    let charts = [
        ChartConfig { max_step: f64::NAN, ..ChartConfig::default() },
        ChartConfig { wick_jitter: f64::INFINITY, ..ChartConfig::default() },
        ChartConfig { margin: f64::NAN, ..ChartConfig::default() },
    ];
    for chart in charts {
        assert_eq!(chart.validate().unwrap_err().kind(), ErrorKind::Configuration);
    }

    let signals = [
        SignalConfig { default_investment: f64::NAN, ..SignalConfig::default() },
        SignalConfig { default_investment: f64::INFINITY, ..SignalConfig::default() },
        SignalConfig { payout_ratio: f64::NAN, ..SignalConfig::default() },
    ];
    for config in signals {
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Configuration);
    }
}
