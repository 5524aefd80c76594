use soupwalk::config::Config;
use soupwalk::extract::TextTransform;
use soupwalk::tagpath::AbsentPolicy;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.browser, "firefox");
    assert!(config.preview_dir.is_none());
    assert_eq!(config.absent_policy, AbsentPolicy::Propagate);
    assert!(matches!(config.text_transform, TextTransform::Trim));
    assert!(!config.create_backup);
    assert_eq!(config.indent_size, 1);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: Config = toml::from_str(
        r#"
        absent_policy = "fail_fast"
        text_transform = "collapse_whitespace"
        "#,
    )
    .unwrap();

    assert_eq!(config.absent_policy, AbsentPolicy::FailFast);
    assert!(matches!(
        config.text_transform,
        TextTransform::CollapseWhitespace
    ));
    assert_eq!(config.browser, "firefox");
    assert_eq!(config.indent_size, 1);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        browser: "chromium".to_string(),
        preview_dir: Some(PathBuf::from("/tmp/previews")),
        absent_policy: AbsentPolicy::FailFast,
        text_transform: TextTransform::Raw,
        create_backup: true,
        indent_size: 2,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.browser, "chromium");
    assert_eq!(loaded.preview_dir, Some(PathBuf::from("/tmp/previews")));
    assert_eq!(loaded.absent_policy, AbsentPolicy::FailFast);
    assert!(matches!(loaded.text_transform, TextTransform::Raw));
    assert!(loaded.create_backup);
    assert_eq!(loaded.indent_size, 2);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(loaded.browser, "firefox");
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "absent_policy = 42\n").unwrap();

    let loaded = Config::load_from(&path);
    assert_eq!(loaded.absent_policy, AbsentPolicy::Propagate);
}

#[test]
fn test_preview_options_from_config() {
    let config = Config {
        browser: "  system ".to_string(),
        preview_dir: Some(PathBuf::from("/tmp/p")),
        indent_size: 4,
        ..Config::default()
    };
    let options = config.preview_options();
    assert!(options.browser.is_none());
    assert_eq!(options.dir, Some(PathBuf::from("/tmp/p")));
    assert_eq!(options.indent_size, 4);
}
