//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `OCPPKIT__<SECTION>__<KEY>`, e.g.
//!    `OCPPKIT__CHECK__DEFAULT_KIND=evse`
//! 3. Config file: `--config FILE`, else `./.ocppkit.toml`, else the user
//!    config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".ocppkit.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings for `ocppkit check`.
    pub check: CheckConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Wire format settings.
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Kind assumed when `--kind` is not given.
    pub default_kind: String,
    pub fail_fast: bool,
    /// `human` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Indent JSON written by `ocppkit sample`.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            check: CheckConfig {
                default_kind: "component".into(),
                fail_fast: false,
                format: "human".into(),
            },
            output: OutputConfig { no_color: false },
            codec: CodecConfig { pretty: true },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// A file named with `--config` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file);
        debug!(path = %path.display(), "Loading configuration");

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("OCPPKIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The file `load` reads: the explicit path, else a local
    /// `.ocppkit.toml` if one exists, else [`Self::config_path`].
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local.to_path_buf();
        }
        Self::config_path()
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ocppkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "ocppkit", "ocppkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key such as `check.default_kind`.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut value = toml::Value::try_from(self).ok()?;
        for part in key.split('.') {
            value = value.get(part)?.clone();
        }
        Some(match value {
            toml::Value::String(s) => s,
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_kind_is_component() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.check.default_kind, "component");
        assert!(!cfg.check.fail_fast);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ocppkit.toml");
        fs::write(&path, "[check]\ndefault_kind = \"evse\"\nfail_fast = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.check.default_kind, "evse");
        assert!(cfg.check.fail_fast);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.check.format, "human");
        assert!(cfg.codec.pretty);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("check.default_kind").as_deref(), Some("component"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
