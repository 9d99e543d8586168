//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mindmap/mindmap.toml`
//! 3. Local config: `<dir>/.mindmap.toml` (usually the working directory)
//! 4. Environment variables: `MINDMAP_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::UNTITLED;

/// Unified configuration for mindmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory exported documents are written to (default: ".")
    pub export_dir: PathBuf,
    /// File-name stem used when the root has no title
    pub untitled_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            untitled_title: UNTITLED.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub export_dir: Option<PathBuf>,
    pub untitled_title: Option<String>,
}

/// Get the XDG config directory for mindmap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mindmap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mindmap.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".mindmap.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let raw = self.export_dir.to_string_lossy().into_owned();
        let expanded = shellexpand::full(&raw)
            .map(|s| s.into_owned())
            .unwrap_or(raw);
        self.export_dir = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            export_dir: overlay
                .export_dir
                .clone()
                .unwrap_or_else(|| self.export_dir.clone()),
            untitled_title: overlay
                .untitled_title
                .clone()
                .unwrap_or_else(|| self.untitled_title.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.mindmap.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Like [`Settings::load`] with an explicit global config path.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply MINDMAP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MINDMAP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("export_dir") {
            settings.export_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("untitled_title") {
            settings.untitled_title = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mindmap configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mindmap/mindmap.toml
#   Local:  ./.mindmap.toml
#   Env:    MINDMAP_* environment variables (e.g. MINDMAP_EXPORT_DIR)

# Directory exported Markdown files are written to (~ and $VAR are expanded)
# export_dir = "~/Documents/mindmaps"

# File-name stem used when the root node has no title
# untitled_title = "無題"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_exports_to_cwd_with_placeholder() {
        let settings = Settings::default();
        assert_eq!(settings.export_dir, PathBuf::from("."));
        assert_eq!(settings.untitled_title, "無題");
    }

    #[test]
    fn given_overlay_when_merging_then_specified_fields_win() {
        let base = Settings::default();
        let overlay = RawSettings {
            export_dir: Some(PathBuf::from("/tmp/maps")),
            untitled_title: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.export_dir, PathBuf::from("/tmp/maps"));
        assert_eq!(merged.untitled_title, "無題");
    }

    #[test]
    fn given_tilde_in_export_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            export_dir: PathBuf::from("~/maps"),
            untitled_title: "x".to_string(),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.export_dir.to_string_lossy().starts_with(&home),
            "export_dir should start with home dir: {}",
            settings.export_dir.display()
        );
    }

    #[test]
    fn given_settings_when_serialized_then_template_keys_match() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("export_dir"));
        assert!(toml.contains("untitled_title"));
        let template = Settings::template();
        assert!(template.contains("export_dir"));
        assert!(template.contains("untitled_title"));
    }
}
