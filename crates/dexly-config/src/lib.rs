//! Shared configuration for the dexly CLI and TUI.
//!
//! A TOML file in the platform config directory, overlaid with `DEXLY_`
//! environment variables, translated into `dexly_core::CatalogConfig`.
//! Both binaries depend on this crate; the CLI layers its flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dexly_core::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENCY, DEFAULT_PAGE_SIZE};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Where the catalog lives and how it is fetched.
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSection {
    /// API root, e.g. "https://pokeapi.co/api/v2".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Request timeout in seconds. Unset means no explicit timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            max_concurrency: default_max_concurrency(),
            timeout_secs: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "dexly", "dexly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("dexly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, still honoring `DEXLY_` env overrides
/// (`DEXLY_CATALOG__PAGE_SIZE=10`). A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DEXLY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if anything goes wrong.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a `CatalogConfig` from the `[catalog]` section.
pub fn to_catalog_config(section: &CatalogSection) -> Result<CatalogConfig, ConfigError> {
    let base_url: url::Url = section
        .base_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "catalog.base_url".into(),
            reason: format!("invalid URL: {}", section.base_url),
        })?;

    if section.page_size == 0 {
        return Err(ConfigError::Validation {
            field: "catalog.page_size".into(),
            reason: "must be at least 1".into(),
        });
    }

    if section.max_concurrency == 0 {
        return Err(ConfigError::Validation {
            field: "catalog.max_concurrency".into(),
            reason: "must be at least 1".into(),
        });
    }

    Ok(CatalogConfig {
        base_url,
        page_size: section.page_size,
        max_concurrency: section.max_concurrency,
        timeout: section.timeout_secs.map(Duration::from_secs),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.catalog.page_size, 20);
        assert_eq!(config.catalog.max_concurrency, 8);
        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.defaults.output, "table");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[catalog]\nbase_url = \"http://localhost:8080/api/v2\"\npage_size = 5\ntimeout_secs = 3\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.catalog.page_size, 5);
        assert_eq!(config.catalog.max_concurrency, 8);
        assert_eq!(config.catalog.timeout_secs, Some(3));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.defaults.output = "json".into();
        config.catalog.max_concurrency = 4;

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn catalog_config_translation() {
        let section = CatalogSection {
            timeout_secs: Some(10),
            ..CatalogSection::default()
        };

        let catalog = to_catalog_config(&section).unwrap();

        assert_eq!(catalog.page_size, 20);
        assert_eq!(catalog.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn rejects_bad_values() {
        let bad_url = CatalogSection {
            base_url: "not a url".into(),
            ..CatalogSection::default()
        };
        assert!(matches!(
            to_catalog_config(&bad_url),
            Err(ConfigError::Validation { ref field, .. }) if field == "catalog.base_url"
        ));

        let zero = CatalogSection {
            max_concurrency: 0,
            ..CatalogSection::default()
        };
        assert!(to_catalog_config(&zero).is_err());
    }
}
