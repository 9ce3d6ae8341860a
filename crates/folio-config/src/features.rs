//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which toggles the
//! GFM extensions and the highlighting stage.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Recognize GFM tables.
    /// Default: true
    #[serde(default = "default_true")]
    pub tables: bool,

    /// Recognize `~~strikethrough~~`.
    /// Default: true
    #[serde(default = "default_true")]
    pub strikethrough: bool,

    /// Recognize `- [ ]` / `- [x]` task list items.
    /// Default: true
    #[serde(default = "default_true")]
    pub tasklists: bool,

    /// Turn bare `https://` and `www.` URLs into links.
    /// Default: true
    #[serde(default = "default_true")]
    pub autolinks: bool,

    /// Syntax-highlight code blocks.
    /// Default: true
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Highlight the code blocks of one document in parallel.
    /// Default: true
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML cannot tell "not set" from "set to the default", so every
    /// field is copied from `other`.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.tables = other.tables;
        self.strikethrough = other.strikethrough;
        self.tasklists = other.tasklists;
        self.autolinks = other.autolinks;
        self.highlight = other.highlight;
        self.parallel = other.parallel;
    }

    /// Create a new FeaturesConfig with all features enabled.
    pub fn all_enabled() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            autolinks: true,
            highlight: true,
            parallel: true,
        }
    }

    /// Create a new FeaturesConfig with all features disabled.
    pub fn all_disabled() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            tasklists: false,
            autolinks: false,
            highlight: false,
            parallel: false,
        }
    }
}

fn default_true() -> bool {
    true
}
