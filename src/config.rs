//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Local config: `<project_dir>/.orgtree.toml`
//! 4. Environment variables: `ORGTREE_*` prefix, `__` separates nested keys

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How `orgtree tree` prints the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
}

/// Which parts of an employee label are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    pub show_position: bool,
    pub show_level: bool,
    pub show_unit: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            show_position: true,
            show_level: true,
            show_unit: true,
        }
    }
}

/// Raw display config for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub format: Option<OutputFormat>,
    pub show_position: Option<bool>,
    pub show_level: Option<bool>,
    pub show_unit: Option<bool>,
}

impl DisplayConfig {
    /// Scalar merge: overlay wins if Some, otherwise keep base.
    pub fn merge(&self, overlay: &RawDisplayConfig) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            show_position: overlay.show_position.unwrap_or(self.show_position),
            show_level: overlay.show_level.unwrap_or(self.show_level),
            show_unit: overlay.show_unit.unwrap_or(self.show_unit),
        }
    }
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub locale: Option<String>,
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub display: RawDisplayConfig,
}

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Collation locale for ordering roles within a level (default: tr)
    pub locale: String,
    /// JSON export of employees/units/departments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Chart rendering options
    pub display: DisplayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "tr".into(),
            data_file: None,
            display: DisplayConfig::default(),
        }
    }
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".orgtree.toml")
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

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(data_file) = &self.data_file {
            let expanded = expand_env_vars(data_file.to_string_lossy().as_ref());
            self.data_file = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base).
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            locale: overlay.locale.clone().unwrap_or_else(|| self.locale.clone()),
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            display: self.display.merge(&overlay.display),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory holding a local `.orgtree.toml`
    ///
    /// A relative `data_file` from the local config is resolved against the
    /// project directory.
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let mut raw = load_raw_settings(&local_path)?;
                raw.data_file = raw.data_file.map(|f| {
                    let unexpanded = f.to_string_lossy().starts_with(['~', '$']);
                    if f.is_relative() && !unexpanded {
                        dir.join(f)
                    } else {
                        f
                    }
                });
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply ORGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("locale"), "locale")? {
            settings.locale = val;
        }
        if let Some(val) = env_value(config.get_string("data_file"), "data_file")? {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Some(val) = env_value(config.get_string("display.format"), "display.format")? {
            settings.display.format =
                OutputFormat::from_str(&val, true).map_err(|e| ApplicationError::Config {
                    message: format!("{}: {e}", env_var_name("display.format")),
                })?;
        }
        let display = &mut settings.display;
        for (key, flag) in [
            ("display.show_position", &mut display.show_position),
            ("display.show_level", &mut display.show_level),
            ("display.show_unit", &mut display.show_unit),
        ] {
            if let Some(val) = env_value(config.get_bool(key), key)? {
                *flag = val;
            }
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
        r#"# orgtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/orgtree/orgtree.toml
#   Local:  <project_dir>/.orgtree.toml
#   Env:    ORGTREE_* environment variables (e.g. ORGTREE_DISPLAY__FORMAT=json)

# Collation locale for ordering roles within a seniority level
# locale = "tr"

# JSON export with "employees", "units" and "departments" arrays
# (a bare array of employees is accepted as well)
# data_file = "~/hr/export.json"

[display]
# Output format: "tree" or "json"
# format = "tree"

# Label parts
# show_position = true
# show_level = true
# show_unit = true
"#
        .to_string()
    }
}

/// `display.show_unit` -> `ORGTREE_DISPLAY__SHOW_UNIT`
fn env_var_name(key: &str) -> String {
    format!("ORGTREE_{}", key.replace('.', "__").to_uppercase())
}

/// Unset variables yield `None`; values of the wrong type are errors.
fn env_value<T>(value: Result<T, ConfigError>, key: &str) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{}: {e}", env_var_name(key)),
        }),
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
    fn given_defaults_when_created_then_uses_turkish_tree_output() {
        let settings = Settings::default();
        assert_eq!(settings.locale, "tr");
        assert_eq!(settings.display.format, OutputFormat::Tree);
        assert!(settings.display.show_unit);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn given_tilde_in_data_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            data_file: Some(PathBuf::from("~/hr/export.json")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let data_file = settings.data_file.unwrap();
        assert!(
            data_file.to_string_lossy().starts_with(&home),
            "data_file should start with home dir: {}",
            data_file.display()
        );
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str(
            r#"
locale = "en"

[display]
show_unit = false
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.locale, "en");
        assert!(!merged.display.show_unit);
        assert!(merged.display.show_level);
        assert_eq!(merged.display.format, OutputFormat::Tree);
    }

    #[test]
    fn given_format_in_toml_when_parsing_then_reads_lowercase_variant() {
        let raw: RawSettings = toml::from_str("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(raw.display.format, Some(OutputFormat::Json));
    }

    #[test]
    fn given_settings_when_serializing_then_roundtrips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_nested_key_when_naming_env_var_then_uses_double_underscore() {
        assert_eq!(env_var_name("locale"), "ORGTREE_LOCALE");
        assert_eq!(
            env_var_name("display.show_unit"),
            "ORGTREE_DISPLAY__SHOW_UNIT"
        );
    }

    #[test]
    fn given_missing_key_when_reading_env_value_then_returns_none() {
        let value: Result<bool, ConfigError> = Err(ConfigError::NotFound("locale".into()));
        assert!(env_value(value, "locale").unwrap().is_none());
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.locale.is_none());
    }
}
