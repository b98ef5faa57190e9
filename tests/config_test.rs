// tests/config_test.rs
use release_hygiene::config::{load_config, Config, CONFIG_FILE_NAME};
use release_hygiene::HygieneError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.project_name, "email-signature-generator");
    assert_eq!(config.tag_pattern, "v*");
    assert_eq!(config.logo.path, PathBuf::from("logo_temp.png"));
    assert_eq!(config.logo.size, 200);
    assert_eq!(config.logo.font_candidates.len(), 4);
    assert!(config
        .scan
        .files
        .contains(&PathBuf::from("tests/unit/test_cli.py")));
}

#[test]
fn test_load_from_explicit_file() {
    let dir = TempDir::new().unwrap();
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
project_name = "acme-tool"
version_file = "acme/__version__.py"
tag_pattern = "release-*"

[logo]
size = 96
font_candidates = ["/opt/fonts/Inter.ttf"]

[scan]
files = ["tests/test_a.py"]

[checks]
rules_file = "hygiene-rules.toml"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(dir.path(), Some(temp_file.path())).unwrap();
    assert_eq!(config.project_name, "acme-tool");
    assert_eq!(config.version_file, PathBuf::from("acme/__version__.py"));
    assert_eq!(config.tag_pattern, "release-*");
    assert_eq!(config.logo.size, 96);
    assert_eq!(config.logo.path, PathBuf::from("logo_temp.png"));
    assert_eq!(
        config.logo.font_candidates,
        vec![PathBuf::from("/opt/fonts/Inter.ttf")]
    );
    assert_eq!(config.scan.files, vec![PathBuf::from("tests/test_a.py")]);
    assert_eq!(
        config.checks.rules_file,
        Some(PathBuf::from("hygiene-rules.toml"))
    );
    assert!(!config.checks.replace_defaults);
}

#[test]
fn test_repository_config_is_found() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "project_name = \"from-repo\"\n",
    )
    .unwrap();

    let config = load_config(dir.path(), None).unwrap();
    assert_eq!(config.project_name, "from-repo");
}

#[test]
fn test_explicit_file_wins_over_repository_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "project_name = \"from-repo\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "project_name = \"explicit\"\n").unwrap();

    let config = load_config(dir.path(), Some(&explicit)).unwrap();
    assert_eq!(config.project_name, "explicit");
}

#[test]
fn test_invalid_config_is_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("broken.toml");
    std::fs::write(&explicit, "[logo\nsize = ").unwrap();

    let err = load_config(dir.path(), Some(&explicit)).unwrap_err();
    assert!(matches!(err, HygieneError::Config(_)));
    assert!(!err.is_expected());
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(dir.path(), Some(&dir.path().join("nope.toml")));
    assert!(matches!(result, Err(HygieneError::Config(_))));
}
