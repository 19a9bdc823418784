use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.typing.phrases.len(), 5);
    assert_eq!(config.upi_id, "ankit@paytm");
    assert_eq!(config.storage.selected_course, "selectedCourse");
}

#[test]
fn nested_reveal_fields_are_camel_case() {
    let config = SiteConfig::from_json(r#"{"reveal": {"staggerDelayMs": 40}, "toastMs": 1000}"#).unwrap();
    assert_eq!(config.reveal.stagger_delay_ms, 40);
    assert_eq!(config.reveal.counter_duration_ms, 2000);
    assert_eq!(config.toast_ms, 1000);
}

#[test]
fn invalid_reveal_values_are_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal": {"threshold": 3.0}}"#).unwrap_err();
    assert!(matches!(err, SiteConfigError::Reveal(_)));
}

#[test]
fn blank_phrases_are_rejected() {
    let err = SiteConfig::from_json(r#"{"typing": {"phrases": ["  "]}}"#).unwrap_err();
    assert_eq!(err.to_string(), "site config field `typing.phrases` must not be empty or zero");
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{"), Err(SiteConfigError::Parse(_))));
}

#[test]
fn log_level_falls_back_to_info() {
    let mut config = SiteConfig::default();
    assert_eq!(config.log_level(), log::Level::Info);
    config.log_level = "debug".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}
