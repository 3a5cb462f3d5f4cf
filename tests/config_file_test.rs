//! Loading widget settings from JSON files.

use std::io::Write;

use swipekit::config::{CarouselConfig, IndicatorPosition, ListConfig, DEFAULT_ANIMATION_MILLIS};
use swipekit::KitError;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_carousel_config_from_file() {
    let file = write_temp(
        r#"{ "infinite": false, "auto_scroll_interval_secs": 5, "indicator_position": "right" }"#,
    );
    let config = CarouselConfig::from_json_file(file.path()).unwrap();

    assert!(!config.infinite);
    assert_eq!(config.auto_scroll_interval_secs, 5);
    assert_eq!(config.indicator_position, IndicatorPosition::Right);
    assert_eq!(config.animation_millis, DEFAULT_ANIMATION_MILLIS);
}

#[test]
fn test_list_config_from_file() {
    let file = write_temp(r#"{ "row_height": 2, "footer_load_more": true }"#);
    let config = ListConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config.row_height, 2);
    assert!(!config.header_refresh);
    assert!(config.footer_load_more);
}

#[test]
fn test_empty_object_gives_defaults() {
    let file = write_temp("{}");
    assert_eq!(
        CarouselConfig::from_json_file(file.path()).unwrap(),
        CarouselConfig::default()
    );
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_temp(r#"{ "indicator_position": "top" }"#);
    let err = CarouselConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, KitError::InvalidConfig(_)));
    assert_eq!(err.error_code(), "E_KIT_CONFIG");
    assert!(!err.is_recoverable());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ListConfig::from_json_file(&path).unwrap_err();

    assert_eq!(err.error_code(), "E_KIT_CONFIG_IO");
    assert!(err.to_string().contains("absent.json"));
}
