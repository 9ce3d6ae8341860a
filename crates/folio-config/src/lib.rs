//! Folio Config
//!
//! This crate handles configuration loading and management
//! for folio, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/folio/config.toml`
//! - macOS: `~/Library/Application Support/folio/config.toml`
//! - Windows: `%APPDATA%\folio\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use folio_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod highlight;

pub use features::FeaturesConfig;
pub use folio_core::{ThemeLayout, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};
pub use highlight::HighlightConfig;

use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Tables        = true
Strikethrough = true
Tasklists     = true
Autolinks     = true
Highlight     = true
Parallel      = true

[highlight]
LightTheme = "InspiredGitHub"
DarkTheme  = "base16-ocean.dark"
Layout     = "variables"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Highlighting configuration
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[highlight]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| FolioError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FolioError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FolioError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat `override_config` as inline TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use folio_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nParallel = false")).unwrap();
    /// assert!(!config.features.parallel);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| FolioError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::from_toml(r#"
    ///     [features]
    ///     Autolinks = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.autolinks);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.highlight.merge(&other.highlight);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.tables);
        assert!(config.features.highlight);
        assert_eq!(config.highlight.light_theme, DEFAULT_LIGHT_THEME);
        assert_eq!(config.highlight.dark_theme, DEFAULT_DARK_THEME);
        assert_eq!(config.highlight.layout, ThemeLayout::Variables);
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed = Config::from_toml(DEFAULT_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_config = Config::from_toml(
            r#"
            [features]
            Parallel = false
            [highlight]
            DarkTheme = "Solarized (dark)"
            Layout = "stacked"
        "#,
        )
        .unwrap();

        base.merge(&override_config);
        assert!(!base.features.parallel);
        assert!(base.features.tables);
        assert_eq!(base.highlight.dark_theme, "Solarized (dark)");
        assert_eq!(base.highlight.light_theme, DEFAULT_LIGHT_THEME);
        assert_eq!(base.highlight.layout, ThemeLayout::Stacked);
    }

    #[test]
    fn test_parse_override_inline() {
        let config = Config::parse_override("[features]\nHighlight = false").unwrap();
        assert!(!config.features.highlight);
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[features\nbroken").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so we just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("folio"));
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("folio-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.features.autolinks = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(!loaded.features.autolinks);
    }
}
