use std::collections::HashMap;

use tailor_core::color::GarmentColor;
use tailor_core::config::DesignerConfig;
use tailor_core::consts::{DEFAULT_REMOVAL_ENDPOINT, ENV_REMOVAL_API_KEY, ENV_REMOVAL_API_URL};
use tailor_core::error::TailorError;
use tailor_core::removal::RemovalTier;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config() {
    let c = DesignerConfig::default();
    assert_eq!(c.removal.endpoint, DEFAULT_REMOVAL_ENDPOINT);
    assert!(c.removal.api_key.is_none());
    assert_eq!(c.removal.tier, RemovalTier::Preview);
    assert_eq!(c.placement.x, 100.0);
    assert_eq!(c.placement.y, 100.0);
    assert_eq!(c.placement.width, 150.0);
    assert_eq!(c.placement.height, 150.0);
    assert_eq!(c.garment.color, GarmentColor::WHITE);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let c = DesignerConfig::from_toml("").unwrap();
    assert_eq!(c.removal.endpoint, DEFAULT_REMOVAL_ENDPOINT);
    assert_eq!(c.placement.width, 150.0);
}

// ---------------------------------------------------------------------------
// TOML parsing
// ---------------------------------------------------------------------------

#[test]
fn test_partial_sections() {
    let c = DesignerConfig::from_toml(
        r##"
[removal]
tier = "50MP"

[garment]
color = "#1a2b3c"
"##,
    )
    .unwrap();

    assert_eq!(c.removal.tier, RemovalTier::FiftyMegapixel);
    assert_eq!(c.removal.endpoint, DEFAULT_REMOVAL_ENDPOINT);
    assert_eq!(c.garment.color, GarmentColor::rgb(0x1a, 0x2b, 0x3c));
    assert_eq!(c.placement.x, 100.0);
}

#[test]
fn test_invalid_color_is_config_error() {
    let err = DesignerConfig::from_toml("[garment]\ncolor = \"#zzz\"\n").unwrap_err();
    assert!(matches!(err, TailorError::Config(_)), "got: {err}");
}

#[test]
fn test_unknown_tier_is_config_error() {
    let err = DesignerConfig::from_toml("[removal]\ntier = \"huge\"\n").unwrap_err();
    assert!(matches!(err, TailorError::Config(_)), "got: {err}");
}

#[test]
fn test_toml_output_omits_missing_key() {
    let s = DesignerConfig::default().to_toml().unwrap();
    assert!(s.contains("[removal]"), "got: {s}");
    assert!(s.contains("tier = \"preview\""), "got: {s}");
    assert!(s.contains("color = \"#ffffff\""), "got: {s}");
    assert!(!s.contains("api_key"), "got: {s}");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tailor.toml");
    std::fs::write(&path, "[placement]\nx = 5.0\ny = 6.0\n").unwrap();

    let c = DesignerConfig::load(&path).unwrap();
    assert_eq!(c.placement.x, 5.0);
    assert_eq!(c.placement.y, 6.0);
    assert_eq!(c.placement.width, 150.0);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DesignerConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, TailorError::Io(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// Environment overrides
// ---------------------------------------------------------------------------

#[test]
fn test_env_overrides_endpoint_and_key() {
    let env: HashMap<&str, &str> = [
        (ENV_REMOVAL_API_URL, "http://localhost:9000/remove"),
        (ENV_REMOVAL_API_KEY, "secret"),
    ]
    .into_iter()
    .collect();

    let mut c = DesignerConfig::default();
    c.apply_env_from(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(c.removal.endpoint, "http://localhost:9000/remove");
    assert_eq!(c.removal.api_key.as_deref(), Some("secret"));
}

#[test]
fn test_blank_env_values_are_ignored() {
    let mut c = DesignerConfig::default();
    c.removal.api_key = Some("from-file".into());
    c.apply_env_from(|_| Some("  ".to_string()));

    assert_eq!(c.removal.endpoint, DEFAULT_REMOVAL_ENDPOINT);
    assert_eq!(c.removal.api_key.as_deref(), Some("from-file"));
}

// ---------------------------------------------------------------------------
// Removal settings
// ---------------------------------------------------------------------------

#[test]
fn test_blank_api_key_counts_as_unset() {
    let c = DesignerConfig::from_toml(
        r#"
[removal]
api_key = "   "
"#,
    )
    .unwrap();

    assert_eq!(c.removal.api_key(), None);
}

#[test]
fn test_zero_timeout_disables_timeout() {
    let c = DesignerConfig::from_toml("[removal]\ntimeout_secs = 0\n").unwrap();
    assert_eq!(c.removal.timeout(), None);

    let c = DesignerConfig::from_toml("[removal]\ntimeout_secs = 15\n").unwrap();
    assert_eq!(c.removal.timeout(), Some(std::time::Duration::from_secs(15)));
}
