//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/domset/domset.toml`
//! 3. Local config: `<config_dir>/.domset.toml`
//! 4. Environment variables: `DOMSET_*` prefix

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How a computed set is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated ids on one line
    #[default]
    Plain,
    /// One id per line
    Lines,
    /// Only the set size
    Count,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Lines => "lines",
            OutputFormat::Count => "count",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "lines" => Ok(OutputFormat::Lines),
            "count" => Ok(OutputFormat::Count),
            other => Err(ApplicationError::Config {
                message: format!("unknown output format: {other}"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (all optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub verify: Option<bool>,
    pub root_markers: Option<Vec<String>>,
}

/// Unified configuration for domset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for computed sets
    pub format: OutputFormat,
    /// Check every computed set against the input before printing it
    pub verify: bool,
    /// Tokens that mark a root in parent-array input
    pub root_markers: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            verify: false,
            root_markers: vec!["None".into(), "none".into(), "null".into(), "-".into()],
        }
    }
}

/// Get the XDG config directory for domset.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "domset").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("domset.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".domset.toml")
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
    /// Merge arrays with union semantics and negation support.
    ///
    /// - Items from overlay are added to base
    /// - Items prefixed with `!` remove the corresponding item from the result
    /// - Duplicates are de-duplicated
    ///
    /// # Examples
    /// ```ignore
    /// merge_array(&["a", "b"], &["c"])       // → ["a", "b", "c"]
    /// merge_array(&["a", "b"], &["!a", "c"]) // → ["b", "c"]
    /// ```
    pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
        let mut result: HashSet<String> = base.iter().cloned().collect();

        for pattern in overlay {
            if let Some(negated) = pattern.strip_prefix('!') {
                result.remove(negated);
            } else {
                result.insert(pattern.clone());
            }
        }

        // Convert to sorted Vec for deterministic output
        let mut vec: Vec<String> = result.into_iter().collect();
        vec.sort();
        vec
    }

    /// Merge local config onto self with union semantics for root markers.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            verify: overlay.verify.unwrap_or(self.verify),
            root_markers: overlay
                .root_markers
                .as_ref()
                .map(|o| Self::merge_array(&self.root_markers, o))
                .unwrap_or_else(|| self.root_markers.clone()),
        }
    }

    /// Apply global config onto defaults with REPLACE semantics for arrays.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            format: global.format.unwrap_or(self.format),
            verify: global.verify.unwrap_or(self.verify),
            root_markers: global
                .root_markers
                .clone()
                .unwrap_or_else(|| self.root_markers.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.domset.toml`
    ///
    /// # Array Merge Semantics
    /// - Defaults → Global: REPLACE
    /// - Global → Local: UNION with `!item` negation
    /// - Any → Env vars: REPLACE
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.apply_global(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply DOMSET_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("DOMSET")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("root_markers")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_bool("verify") {
            settings.verify = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("root_markers") {
            settings.root_markers = val;
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
        r#"# domset configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/domset/domset.toml  (defines your baseline)
#   Local:  <config-dir>/.domset.toml     (additions, see -C)
#   Env:    DOMSET_* environment variables (explicit overrides)
#
# root_markers in the local file UNION with the global list.
# Use "!marker" to REMOVE an inherited marker:
#   root_markers = ["_", "!null"]

# Output format for `domset solve`: plain, lines or count
# format = "plain"

# Check the computed set against the input before printing it
# verify = false

# Tokens meaning "no parent" in the input
# root_markers = ["None", "none", "null", "-"]
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
    fn given_negated_marker_when_merging_then_removes_it() {
        let base = vec!["None".to_string(), "null".to_string()];
        let overlay = vec!["!null".to_string(), "_".to_string()];

        let merged = Settings::merge_array(&base, &overlay);

        assert_eq!(merged, vec!["None".to_string(), "_".to_string()]);
    }

    #[test]
    fn given_format_names_when_parsing_then_accepts_any_case() {
        assert_eq!("Lines".parse::<OutputFormat>().unwrap(), OutputFormat::Lines);
        assert!("json".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn given_defaults_when_serializing_then_renders_toml() {
        let rendered = Settings::default().to_toml().unwrap();

        assert!(rendered.contains("format = \"plain\""));
        assert!(rendered.contains("verify = false"));
    }
}
