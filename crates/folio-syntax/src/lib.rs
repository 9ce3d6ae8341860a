//! Folio Syntax
//!
//! This crate highlights code blocks for a light and a dark theme at once
//! using the syntect library.
//!
//! # Features
//!
//! - **Dual themes** - Every token is styled under both themes in one pass
//! - **Language registry** - Map common names (py, js, golang) to grammars
//! - **Plain-text fallback** - Unknown languages still render, unstyled
//! - **Two layouts** - CSS custom properties or two stacked `<pre>` blocks
//!
//! # Example
//!
//! ```
//! use folio_syntax::Highlighter;
//!
//! let highlighter = Highlighter::new().unwrap();
//! let block = highlighter
//!     .highlight("fn main() { println!(&quot;hi&quot;); }\n", Some("rust"))
//!     .unwrap();
//! assert_eq!(block.syntax, "Rust");
//! assert!(block.html.contains("--folio-dark"));
//! ```

mod css;
mod html;
mod languages;
mod tokens;

pub use css::stylesheet;
pub use html::{css_color, Palette, ThemeColors};
pub use languages::{LanguageRegistry, LANGUAGE_ALIASES};
pub use tokens::{tokenize, DualToken, TokenLine};

use folio_core::{
    FolioError, HighlightedBlock, Result, ThemeLayout, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME,
};
use folio_parser::decode_html_entities;
use log::{debug, trace};
use std::path::Path;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Fallback colors for themes that do not set them.
const LIGHT_FALLBACK: ThemeColors = ThemeColors {
    foreground: Color { r: 0x24, g: 0x29, b: 0x2e, a: 0xFF },
    background: Color { r: 0xFF, g: 0xFF, b: 0xFF, a: 0xFF },
};
const DARK_FALLBACK: ThemeColors = ThemeColors {
    foreground: Color { r: 0xD4, g: 0xD4, b: 0xD4, a: 0xFF },
    background: Color { r: 0x1E, g: 0x1E, b: 0x1E, a: 0xFF },
};

/// Dual-theme syntax highlighter for code blocks.
///
/// Holds the grammar set, the language registry and both themes. All of it
/// is read-only after construction, so one highlighter can serve many
/// threads at once.
pub struct Highlighter {
    /// Syntax definitions
    syntax_set: SyntaxSet,
    /// Identifier to grammar lookup
    registry: LanguageRegistry,
    light: Theme,
    dark: Theme,
    light_name: String,
    dark_name: String,
    /// Names of every theme that was available at construction
    theme_names: Vec<String>,
    layout: ThemeLayout,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("light", &self.light_name)
            .field("dark", &self.dark_name)
            .field("layout", &self.layout)
            .field("languages", &self.registry.len())
            .finish()
    }
}

impl Highlighter {
    /// Create a highlighter with the default themes
    /// (InspiredGitHub and base16-ocean.dark).
    pub fn new() -> Result<Self> {
        Self::with_themes(DEFAULT_LIGHT_THEME, DEFAULT_DARK_THEME)
    }

    /// Create a highlighter with two of the bundled themes.
    ///
    /// Bundled themes include:
    /// - "InspiredGitHub"
    /// - "Solarized (light)"
    /// - "base16-ocean.light"
    /// - "base16-ocean.dark"
    /// - "base16-eighties.dark"
    /// - "base16-mocha.dark"
    /// - "Solarized (dark)"
    pub fn with_themes(light: &str, dark: &str) -> Result<Self> {
        Self::from_theme_set(ThemeSet::load_defaults(), light, dark)
    }

    /// Create a highlighter picking both themes from `themes`.
    ///
    /// # Errors
    ///
    /// [`FolioError::ThemeNotFound`] when either name is not in the set.
    pub fn from_theme_set(themes: ThemeSet, light: &str, dark: &str) -> Result<Self> {
        let pick = |name: &str| {
            themes
                .themes
                .get(name)
                .cloned()
                .ok_or_else(|| FolioError::ThemeNotFound {
                    name: name.to_string(),
                })
        };
        let light_theme = pick(light)?;
        let dark_theme = pick(dark)?;

        let syntax_set = SyntaxSet::load_defaults_newlines();
        let registry = LanguageRegistry::build(&syntax_set);
        debug!(
            "Loaded {} grammars ({} identifiers), themes {:?} / {:?}",
            syntax_set.syntaxes().len(),
            registry.len(),
            light,
            dark
        );

        Ok(Self {
            syntax_set,
            registry,
            light: light_theme,
            dark: dark_theme,
            light_name: light.to_string(),
            dark_name: dark.to_string(),
            theme_names: themes.themes.keys().cloned().collect(),
            layout: ThemeLayout::default(),
        })
    }

    /// Set the output layout.
    pub fn with_layout(mut self, layout: ThemeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Get the output layout.
    pub fn layout(&self) -> ThemeLayout {
        self.layout
    }

    /// Names of the light and dark theme.
    pub fn theme_names(&self) -> (&str, &str) {
        (&self.light_name, &self.dark_name)
    }

    /// List available theme names, sorted.
    pub fn themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.theme_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get a reference to the syntax set.
    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }

    /// Find the grammar for a language identifier.
    ///
    /// Absent or unknown languages get the plain-text grammar.
    pub fn syntax_for(&self, language: Option<&str>) -> &SyntaxReference {
        let Some(language) = language else {
            return self.syntax_set.find_syntax_plain_text();
        };
        match self.registry.resolve(&self.syntax_set, language) {
            Some(syntax) => syntax,
            None => {
                debug!("No grammar for language {:?}, using plain text", language);
                self.syntax_set.find_syntax_plain_text()
            }
        }
    }

    /// Highlight HTML-escaped code, as it appears inside `<pre><code>`.
    ///
    /// Entities are decoded first so the grammar sees the real source.
    pub fn highlight(&self, escaped_code: &str, language: Option<&str>) -> Result<HighlightedBlock> {
        let code = decode_html_entities(escaped_code);
        self.highlight_source(&code, language)
    }

    /// Highlight raw source code.
    pub fn highlight_source(&self, code: &str, language: Option<&str>) -> Result<HighlightedBlock> {
        let syntax = self.syntax_for(language);
        let lines = tokenize(&self.syntax_set, syntax, &self.light, &self.dark, code)?;

        let label = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("text");
        let palette = self.palette();
        let html = match self.layout {
            ThemeLayout::Variables => html::write_variables(&lines, label, &palette),
            ThemeLayout::Stacked => html::write_stacked(&lines, label, &palette),
        };

        trace!(
            "Highlighted {} lines as {} ({} -> {} bytes)",
            lines.len(),
            syntax.name,
            code.len(),
            html.len()
        );
        Ok(HighlightedBlock::new(syntax.name.clone(), html))
    }

    /// Block-level colors of both themes.
    pub fn palette(&self) -> Palette {
        Palette {
            light: theme_colors(&self.light, LIGHT_FALLBACK),
            dark: theme_colors(&self.dark, DARK_FALLBACK),
        }
    }

    /// Stylesheet for this highlighter's layout.
    pub fn stylesheet(&self) -> String {
        stylesheet(self.layout)
    }

    /// List languages as `(grammar name, identifiers)`, sorted by name.
    pub fn languages(&self) -> Vec<(&str, Vec<&str>)> {
        let mut langs: Vec<(&str, Vec<&str>)> = self
            .syntax_set
            .syntaxes()
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.hidden)
            .map(|(i, s)| (s.name.as_str(), self.registry.identifiers_for(i)))
            .collect();
        langs.sort_by_key(|(name, _)| name.to_lowercase());
        langs
    }

    /// Check if a language identifier resolves to a grammar.
    pub fn has_language(&self, name: &str) -> bool {
        self.registry.lookup(name).is_some()
    }
}

/// Load the bundled themes plus every `.tmTheme` under `theme_dir`.
pub fn load_themes(theme_dir: Option<&Path>) -> Result<ThemeSet> {
    let mut themes = ThemeSet::load_defaults();
    if let Some(dir) = theme_dir {
        themes.add_from_folder(dir).map_err(|e| {
            FolioError::Config(format!("Could not load themes from {}: {}", dir.display(), e))
        })?;
        debug!("Loaded themes from {}", dir.display());
    }
    Ok(themes)
}

fn theme_colors(theme: &Theme, fallback: ThemeColors) -> ThemeColors {
    ThemeColors {
        foreground: theme.settings.foreground.unwrap_or(fallback.foreground),
        background: theme.settings.background.unwrap_or(fallback.background),
    }
}
