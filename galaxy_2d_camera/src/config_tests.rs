use super::*;
use crate::error::Error;

// ============================================================================
// DisplayConfig parsing
// ============================================================================

#[test]
fn test_display_config_from_toml() {
    let config = DisplayConfig::from_toml_str("[display]\nwidth = 1280\nheight = 720\n").unwrap();
    assert_eq!(config, DisplayConfig { width: 1280, height: 720 });
}

#[test]
fn test_display_config_ignores_other_tables() {
    let content = r#"
        [project]
        title = "Shooter"

        [display]
        width = 1920
        height = 1080
    "#;
    let config = DisplayConfig::from_toml_str(content).unwrap();
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
}

#[test]
fn test_display_config_missing_table_uses_defaults() {
    let config = DisplayConfig::from_toml_str("").unwrap();
    assert_eq!(config, DisplayConfig::default());
}

#[test]
fn test_display_config_partial_table_uses_defaults() {
    let config = DisplayConfig::from_toml_str("[display]\nwidth = 800\n").unwrap();
    assert_eq!(config.width, 800);
    assert_eq!(config.height, DisplayConfig::default().height);
}

#[test]
fn test_display_config_malformed_toml_fails() {
    let result = DisplayConfig::from_toml_str("[display\nwidth = ");
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_display_config_negative_width_fails() {
    let result = DisplayConfig::from_toml_str("[display]\nwidth = -5\n");
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_display_config_load_missing_file_fails() {
    let result = DisplayConfig::load(Path::new("/nonexistent/galaxy2d/game.toml"));
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_display_config_load_from_file() {
    let path = std::env::temp_dir().join(format!("galaxy2d_display_{}.toml", std::process::id()));
    std::fs::write(&path, "[display]\nwidth = 640\nheight = 480\n").unwrap();

    let config = DisplayConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config, DisplayConfig { width: 640, height: 480 });
}

// ============================================================================
// DisplayReference
// ============================================================================

#[test]
fn test_display_reference_caches_aspect_ratio() {
    let display = DisplayReference::new(&DisplayConfig { width: 1280, height: 720 }).unwrap();
    assert_eq!(display.width(), 1280.0);
    assert_eq!(display.height(), 720.0);
    assert_eq!(display.aspect_ratio(), 1280.0 / 720.0);
}

#[test]
fn test_display_reference_rejects_zero_width() {
    let result = DisplayReference::new(&DisplayConfig { width: 0, height: 720 });
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_display_reference_rejects_zero_height() {
    let result = DisplayReference::new(&DisplayConfig { width: 1280, height: 0 });
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
