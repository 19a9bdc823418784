#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = RevealConfig::from_json("{}").expect("empty config should parse");
    assert_eq!(config, RevealConfig::default());
    assert_eq!(config.threshold, 0.1);
    assert_eq!(config.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.section_threshold, 0.15);
    assert_eq!(config.counter_duration_ms, 2000);
    assert_eq!(config.counter_step_ms, 16);
    assert_eq!(config.stagger_delay_ms, 100);
    assert_eq!(config.resize_debounce_ms, 250);
}

#[test]
fn camel_case_fields_override_defaults() {
    let config = RevealConfig::from_json(r#"{ "staggerDelayMs": 40, "rootMargin": "0px", "threshold": 0.5 }"#)
        .expect("config should parse");
    assert_eq!(config.stagger_delay_ms, 40);
    assert_eq!(config.root_margin, "0px");
    assert_eq!(config.threshold, 0.5);
    assert_eq!(config.counter_duration_ms, 2000);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = RevealConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    let err = RevealConfig::from_json(r#"{ "threshold": 1.5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::OutOfRange { field: "threshold", .. }));
}

#[test]
fn zero_step_is_rejected() {
    let err = RevealConfig::from_json(r#"{ "counterStepMs": 0 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::OutOfRange { field: "counterStepMs", .. }));
    assert_eq!(err.to_string(), "reveal config field `counterStepMs` out of range: 0");
}
