//! Highlighting configuration.

use folio_core::{ThemeLayout, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme selection for code highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HighlightConfig {
    /// Theme used for the light rendering
    #[serde(default = "default_light")]
    pub light_theme: String,

    /// Theme used for the dark rendering
    #[serde(default = "default_dark")]
    pub dark_theme: String,

    /// Output layout
    #[serde(default)]
    pub layout: ThemeLayout,

    /// Extra directory of `.tmTheme` files to load alongside the bundled themes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_dir: Option<PathBuf>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            light_theme: default_light(),
            dark_theme: default_dark(),
            layout: ThemeLayout::default(),
            theme_dir: None,
        }
    }
}

impl HighlightConfig {
    /// Merge another HighlightConfig into this one.
    pub fn merge(&mut self, other: &HighlightConfig) {
        self.light_theme = other.light_theme.clone();
        self.dark_theme = other.dark_theme.clone();
        self.layout = other.layout;
        self.theme_dir = other.theme_dir.clone();
    }
}

fn default_light() -> String {
    DEFAULT_LIGHT_THEME.to_string()
}

fn default_dark() -> String {
    DEFAULT_DARK_THEME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml() {
        let config: HighlightConfig = toml::from_str(r#"Layout = "stacked""#).unwrap();
        assert_eq!(config.layout, ThemeLayout::Stacked);
        assert_eq!(config.light_theme, DEFAULT_LIGHT_THEME);
        assert_eq!(config.dark_theme, DEFAULT_DARK_THEME);
    }
}
