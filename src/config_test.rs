#![allow(clippy::float_cmp)]

use super::*;
use crate::error::ErrorCode;

#[test]
fn default_matches_constants() {
    let c = EditorConfig::default();
    assert_eq!(c.storage_key, "polaroidAlbums");
    assert_eq!(c.max_image_side, 1000);
    assert_eq!(c.jpeg_quality, 0.8);
    assert_eq!(c.write_policy, WritePolicy::EveryStep);
    assert!(c.seed_sample_content);
    assert!(c.validate().is_ok());
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let c = EditorConfig::from_json("{}").unwrap();
    assert_eq!(c, EditorConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let c = EditorConfig::from_json(
        r#"{"storage_key":"albums-v2","max_image_side":640,"jpeg_quality":0.5,"write_policy":"on_release","seed_sample_content":false}"#,
    )
    .unwrap();
    assert_eq!(c.storage_key, "albums-v2");
    assert_eq!(c.max_image_side, 640);
    assert_eq!(c.jpeg_quality, 0.5);
    assert_eq!(c.write_policy, WritePolicy::OnRelease);
    assert!(!c.seed_sample_content);
}

#[test]
fn from_json_rejects_unknown_field() {
    let err = EditorConfig::from_json(r#"{"max_side":640}"#).unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn from_json_rejects_malformed() {
    assert!(matches!(EditorConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_write_policy() {
    assert!(EditorConfig::from_json(r#"{"write_policy":"sometimes"}"#).is_err());
}

#[test]
fn validate_rejects_zero_max_side() {
    let c = EditorConfig { max_image_side: 0, ..Default::default() };
    assert!(matches!(c.validate(), Err(ConfigError::Invalid { field: "max_image_side", .. })));
}

#[test]
fn validate_rejects_quality_out_of_range() {
    for q in [0.0, -0.5, 1.5, f32::NAN] {
        let c = EditorConfig { jpeg_quality: q, ..Default::default() };
        assert!(matches!(c.validate(), Err(ConfigError::Invalid { field: "jpeg_quality", .. })), "quality {q}");
    }
}

#[test]
fn validate_rejects_blank_storage_key() {
    let c = EditorConfig { storage_key: "  ".into(), ..Default::default() };
    assert!(matches!(c.validate(), Err(ConfigError::Invalid { field: "storage_key", .. })));
}

#[test]
fn jpeg_quality_percent_rounds() {
    assert_eq!(EditorConfig::default().jpeg_quality_percent(), 80);
    let c = EditorConfig { jpeg_quality: 1.0, ..Default::default() };
    assert_eq!(c.jpeg_quality_percent(), 100);
}
