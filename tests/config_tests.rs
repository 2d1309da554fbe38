use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

use ghissues::util::config::AppConfig;

#[test]
fn test_load_full_config() {
    let toml = r#"
[github]
api_url = "https://github.example.com/api/v3"
timeout_secs = 10

[ui]
show_labels = false
show_avatar_urls = true
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.github.timeout(), Duration::from_secs(10));
    assert!(!config.ui.show_labels);
    assert!(config.ui.show_avatar_urls);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[ui]
show_avatar_urls = true
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.timeout_secs, 30);
    assert!(config.ui.show_labels);
    assert!(config.ui.show_avatar_urls);
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"").unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert!(config.ui.show_labels);
    assert!(!config.ui.show_avatar_urls);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"this is not [valid toml {{").unwrap();

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.timeout_secs, 30);
    assert!(config.ui.show_labels);
    assert!(!config.ui.show_avatar_urls);
}
