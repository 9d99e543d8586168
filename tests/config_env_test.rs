//! Environment-variable layer of Settings loading.
//!
//! Kept in its own test binary: it mutates process environment, which would
//! race with the file-layer tests in `config_test.rs`.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use mindmap::config::{local_config_path, Settings};

#[test]
fn given_mindmap_env_vars_when_loading_then_override_local_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "export_dir = \"/local/maps\"\nuntitled_title = \"Local\"\n",
    )
    .unwrap();
    std::env::set_var("MINDMAP_EXPORT_DIR", "/env/maps");
    std::env::set_var("MINDMAP_UNTITLED_TITLE", "FromEnv");

    let settings = Settings::load_from(None, Some(dir.path()));

    std::env::remove_var("MINDMAP_EXPORT_DIR");
    std::env::remove_var("MINDMAP_UNTITLED_TITLE");
    let settings = settings.expect("load settings");
    assert_eq!(settings.export_dir, PathBuf::from("/env/maps"));
    assert_eq!(settings.untitled_title, "FromEnv");
}
