//! Environment overrides live in their own test binary: they mutate process state.

use tempfile::TempDir;

use domset::config::{OutputFormat, Settings};

#[test]
fn given_env_overrides_when_load_then_replace_file_values() {
    // Arrange
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".domset.toml"), "format = \"count\"\n").unwrap();
    std::env::set_var("DOMSET_FORMAT", "lines");
    std::env::set_var("DOMSET_VERIFY", "true");
    std::env::set_var("DOMSET_ROOT_MARKERS", "_,~");

    // Act
    let settings = Settings::load(Some(dir.path()));

    std::env::remove_var("DOMSET_FORMAT");
    std::env::remove_var("DOMSET_VERIFY");
    std::env::remove_var("DOMSET_ROOT_MARKERS");

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.format, OutputFormat::Lines);
    assert!(settings.verify);
    assert_eq!(settings.root_markers, vec!["_".to_string(), "~".to_string()]);
}
