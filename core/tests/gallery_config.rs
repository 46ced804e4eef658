use store_gallery_core::contract::{FADE_MS, REMOVED_FIELD};
use store_gallery_core::{ConfigError, GalleryConfig};

#[test]
fn empty_object_yields_template_defaults() {
    let config = GalleryConfig::from_json("{}").expect("config");
    assert_eq!(config, GalleryConfig::default());
    assert_eq!(config.removed_field, REMOVED_FIELD);
    assert_eq!(config.fade_ms, FADE_MS);
    assert_eq!(config.preview_selector(), ".gallery-preview.upload-preview");
    assert_eq!(config.count_selector(), ".upload-count");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = GalleryConfig::from_json(r#"{"fade_ms": 0, "file_input_id": "photos"}"#)
        .expect("config");
    assert_eq!(config.fade_ms, 0);
    assert_eq!(config.file_input_id, "photos");
    assert_eq!(config.remove_class, "remove-image");
}

#[test]
fn unknown_field_is_rejected() {
    let err = GalleryConfig::from_json(r#"{"fade": 10}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_names_are_rejected() {
    let err = GalleryConfig::from_json(r#"{"removed_field": " "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty("removed_field")));

    let err = GalleryConfig::from_json(r#"{"preview_classes": []}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty("preview_classes")));
}

#[test]
fn fade_delay_is_bounded() {
    let err = GalleryConfig::from_json(r#"{"fade_ms": 60000}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::FadeTooLong {
            found: 60000,
            max: 10000
        }
    ));
}
