//! Integration tests for layered Settings loading.
//!
//! Global config is passed explicitly so the user's real XDG config never
//! leaks into the results.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use mindmap::application::ApplicationError;
use mindmap::config::{local_config_path, Settings};

#[test]
fn given_no_config_files_when_loading_then_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(None, Some(dir.path())).expect("load settings");

    assert_eq!(settings.untitled_title, "無題");
    assert_eq!(settings.export_dir, PathBuf::from("."));
}

#[test]
fn given_global_and_local_config_when_loading_then_local_wins() {
    let global_dir = TempDir::new().unwrap();
    let global_path = global_dir.path().join("mindmap.toml");
    fs::write(
        &global_path,
        "export_dir = \"/global/maps\"\nuntitled_title = \"Untitled\"\n",
    )
    .unwrap();

    let local_dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(local_dir.path()),
        "export_dir = \"/local/maps\"\n",
    )
    .unwrap();

    let settings =
        Settings::load_from(Some(global_path.as_path()), Some(local_dir.path())).expect("load settings");

    assert_eq!(settings.export_dir, PathBuf::from("/local/maps"));
    assert_eq!(settings.untitled_title, "Untitled");
}

#[test]
fn given_missing_global_file_when_loading_then_ignored() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let settings = Settings::load_from(Some(missing.as_path()), None).expect("load settings");

    assert_eq!(settings, Settings::load_from(None, None).unwrap());
}

#[test]
fn given_malformed_local_config_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "export_dir = [not toml").unwrap();

    let err = Settings::load_from(None, Some(dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }), "{:?}", err);
    assert!(err.to_string().contains(".mindmap.toml"));
}

#[test]
fn given_template_when_parsed_then_is_valid_toml_with_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), Settings::template()).unwrap();

    let settings = Settings::load_from(None, Some(dir.path())).expect("template parses");

    assert_eq!(settings.untitled_title, "無題");
}
