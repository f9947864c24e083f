use svg_chart::core::{GapPolicy, LogBase, TimeFormat, XAxis, YAxis};
use svg_chart::{ChartConfig, ChartData, ChartError};

const CONFIG_JSON: &str = r##"{
    "dimensions": {
        "width": { "image": 800, "plot": 700 },
        "height": { "image": 300, "plot": 240 },
        "margins": { "left": 70, "right": 30, "top": 20, "bottom": 40 }
    },
    "grid": {
        "gaps": { "x": { "gap_by": "px", "val": 100 } },
        "lines": {
            "axes": { "color": "#222", "width": 1.5 },
            "main": { "color": "#ddd", "width": 0.5 },
            "font": { "color": "#444", "size": 10 }
        }
    },
    "series": { "width": 1, "alpha": 1 }
}"##;

const TIME_LOG_DATA_JSON: &str = r##"{
    "title": "latency",
    "grid": {
        "x": {
            "type": "time",
            "title": "uptime",
            "time_format": "h:m:s",
            "ticks": {
                "raw": [0, 60000, 120000],
                "formatted": ["0:00:00", "0:01:00", "0:02:00"],
                "min": 0,
                "max": 120000,
                "range": 120000
            }
        },
        "y": {
            "type": "log",
            "title": "ms",
            "base": 10,
            "ticks": { "min": 1, "max": 1000, "range": 999 }
        }
    },
    "series": [
        { "label": "p99", "color": "#ff8800", "data": [12.5, null, 40] }
    ]
}"##;

#[test]
fn config_parses_with_optional_sections_absent() {
    let config = ChartConfig::from_json_str(CONFIG_JSON).expect("config");

    assert_eq!(config.background, None);
    assert_eq!(config.grid.gaps.x, GapPolicy::Pixels(100.0));
    assert_eq!(config.grid.gaps.y, None);
    assert!(config.series.point.is_none());
    assert!(config.series.fill.is_none());
    assert_eq!(config.dimensions.margins.left, 70.0);
}

#[test]
fn gap_policy_uses_gap_by_tag() {
    let value: GapPolicy =
        serde_json::from_str(r#"{"gap_by":"val","val":2.5}"#).expect("val policy");
    assert_eq!(value, GapPolicy::Value(2.5));

    let json = serde_json::to_string(&GapPolicy::Pixels(40.0)).expect("serialize");
    assert_eq!(json, r#"{"gap_by":"px","val":40.0}"#);

    assert!(serde_json::from_str::<GapPolicy>(r#"{"gap_by":"pct","val":1}"#).is_err());
}

#[test]
fn time_x_and_log_y_data_parses() {
    let data = ChartData::from_json_str(TIME_LOG_DATA_JSON).expect("data");

    assert_eq!(data.title, "latency");
    match &data.grid.x {
        XAxis::Time {
            title,
            ticks,
            time_format,
        } => {
            assert_eq!(title, "uptime");
            assert_eq!(*time_format, TimeFormat::HoursMinutesSeconds);
            assert_eq!(ticks.raw, vec![0.0, 60_000.0, 120_000.0]);
            assert_eq!(ticks.formatted.len(), 3);
        }
        other => panic!("expected time axis, got {other:?}"),
    }
    assert_eq!(data.grid.y.base(), Some(LogBase::Ten));
    assert_eq!(data.series[0].data, vec![Some(12.5), None, Some(40.0)]);
}

#[test]
fn unsupported_log_base_is_rejected() {
    let input = TIME_LOG_DATA_JSON.replace(r#""base": 10"#, r#""base": 3"#);
    let result = ChartData::from_json_str(&input);
    assert!(matches!(result, Err(ChartError::InvalidData(message)) if message.contains("log base")));
}

#[test]
fn time_axis_requires_a_time_format() {
    let input = TIME_LOG_DATA_JSON.replace(r#""time_format": "h:m:s","#, "");
    assert!(ChartData::from_json_str(&input).is_err());
}

#[test]
fn unknown_time_format_is_rejected() {
    let input = TIME_LOG_DATA_JSON.replace(r#""h:m:s""#, r#""y-d""#);
    assert!(ChartData::from_json_str(&input).is_err());
}

#[test]
fn linear_y_ignores_base_and_may_omit_ticks() {
    let input = r#"{
        "grid": {
            "x": { "type": "linear", "ticks": { "raw": [0, 1], "min": 0, "max": 1, "range": 1 } },
            "y": { "type": "linear", "base": 10 }
        },
        "series": []
    }"#;
    let data = ChartData::from_json_str(input).expect("data");

    assert_eq!(data.title, "");
    assert!(matches!(data.grid.y, YAxis::Linear { ticks: None, .. }));
    assert_eq!(data.grid.y.base(), None);
}

#[test]
fn documents_survive_a_pretty_json_round_trip() {
    let config = ChartConfig::from_json_str(CONFIG_JSON).expect("config");
    let data = ChartData::from_json_str(TIME_LOG_DATA_JSON).expect("data");

    let config_again =
        ChartConfig::from_json_str(&config.to_json_pretty().expect("config json")).expect("reparse");
    let data_again =
        ChartData::from_json_str(&data.to_json_pretty().expect("data json")).expect("reparse");

    assert_eq!(config_again, config);
    assert_eq!(data_again, data);
}

#[test]
fn malformed_json_maps_to_invalid_data() {
    let result = ChartConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(ChartError::InvalidData(message)) if message.contains("chart config")));
}
