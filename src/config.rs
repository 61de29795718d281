//! Configuration file support for apk-graph.
//!
//! Provides YAML-based configuration through `apk-graph.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! file values over built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "apk-graph.config.yml";

/// Index path used when neither the CLI nor the config names one
pub const DEFAULT_INDEX_PATH: &str = "APKINDEX";

/// Number of packages listed by `critical` and `overview` by default
pub const DEFAULT_CRITICAL_LIMIT: usize = 20;

/// Default hop limit for bounded subgraph extraction
pub const DEFAULT_DEPTH: usize = 2;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub index: Option<PathBuf>,
    pub format: Option<String>,
    pub critical_limit: Option<usize>,
    pub depth: Option<usize>,
    pub transitive: Option<bool>,
    pub default_package: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying the config file over the defaults.
///
/// Command-line flags are applied on top of these by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub index: PathBuf,
    pub format: OutputFormat,
    pub critical_limit: usize,
    pub depth: usize,
    pub transitive: bool,
    pub default_package: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index: PathBuf::from(DEFAULT_INDEX_PATH),
            format: OutputFormat::default(),
            critical_limit: DEFAULT_CRITICAL_LIMIT,
            depth: DEFAULT_DEPTH,
            transitive: false,
            default_package: None,
        }
    }
}

impl Settings {
    /// Merges an (already validated) config file over the defaults.
    pub fn from_config(config: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Settings::default();
        let Some(config) = config else {
            return Ok(settings);
        };

        if let Some(index) = &config.index {
            settings.index = index.clone();
        }
        if let Some(format) = &config.format {
            settings.format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
        }
        if let Some(limit) = config.critical_limit {
            settings.critical_limit = limit;
        }
        if let Some(depth) = config.depth {
            settings.depth = depth;
        }
        if let Some(transitive) = config.transitive {
            settings.transitive = transitive;
        }
        settings.default_package = config.default_package.clone();

        Ok(settings)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.critical_limit == Some(0) {
        bail!(
            "Invalid config: critical_limit must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {}.",
            DEFAULT_CRITICAL_LIMIT
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref package) = config.default_package {
        if package.trim().is_empty() {
            bail!(
                "Invalid config: default_package must not be empty.\n\n\
                 💡 Hint: Name a package from the index (e.g., \"busybox\")."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
index: /var/cache/apk/APKINDEX
format: text
critical_limit: 10
depth: 3
transitive: true
default_package: curl
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.index, Some(PathBuf::from("/var/cache/apk/APKINDEX")));
        assert_eq!(config.format.as_deref(), Some("text"));
        assert_eq!(config.critical_limit, Some(10));
        assert_eq!(config.depth, Some(3));
        assert_eq!(config.transitive, Some(true));
        assert_eq!(config.default_package.as_deref(), Some("curl"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_critical_limit_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "critical_limit: 0\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err
            .to_string()
            .contains("critical_limit must be greater than 0"));
    }

    #[test]
    fn test_unknown_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: yaml\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid format: yaml"));
    }

    #[test]
    fn test_empty_default_package_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "default_package: \"  \"\n");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("default_package must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: json\ncheck_cve: true\n");

        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_config(None).unwrap();

        assert_eq!(settings.index, PathBuf::from(DEFAULT_INDEX_PATH));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.critical_limit, DEFAULT_CRITICAL_LIMIT);
        assert_eq!(settings.depth, DEFAULT_DEPTH);
        assert!(!settings.transitive);
        assert!(settings.default_package.is_none());
    }

    #[test]
    fn test_settings_from_config_overrides_defaults() {
        let config = ConfigFile {
            format: Some("text".to_string()),
            depth: Some(4),
            ..Default::default()
        };

        let settings = Settings::from_config(Some(&config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.depth, 4);
        assert_eq!(settings.critical_limit, DEFAULT_CRITICAL_LIMIT);
    }
}
