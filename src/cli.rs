//! Command-line interface for folio.

use clap::Parser;
use folio_config::{Config, ThemeLayout};
use std::path::PathBuf;

/// Folio - Render Markdown to embeddable HTML.
///
/// Code blocks are highlighted for a light and a dark theme at once; the
/// page picks one with CSS (see `--css`).
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author = "Folio Contributors",
    version,
    about = "Render Markdown to HTML with dual-theme syntax highlighting",
    after_help = "Examples:\n  \
                  cat README.md | folio\n  \
                  folio notes.md > notes.html\n  \
                  folio --standalone --title Notes notes.md > notes.html\n  \
                  folio --layout stacked --dark-theme 'Solarized (dark)' doc.md\n  \
                  folio --css > folio.css"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Theme for the light rendering
    #[arg(long = "light-theme", value_name = "NAME")]
    pub light_theme: Option<String>,

    /// Theme for the dark rendering
    #[arg(long = "dark-theme", value_name = "NAME")]
    pub dark_theme: Option<String>,

    /// Code block layout (variables, stacked)
    #[arg(long = "layout")]
    pub layout: Option<ThemeLayout>,

    /// Disable syntax highlighting
    #[arg(long = "no-highlight")]
    pub no_highlight: bool,

    /// Highlight code blocks on the current thread only
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Emit a complete HTML page with the theme stylesheet
    #[arg(long = "standalone")]
    pub standalone: bool,

    /// Page title for --standalone (defaults to the file name)
    #[arg(long = "title", requires = "standalone")]
    pub title: Option<String>,

    /// Print the theme stylesheet and exit
    #[arg(long = "css")]
    pub css: bool,

    /// List available themes and exit
    #[arg(long = "list-themes")]
    pub list_themes: bool,

    /// List supported languages and exit
    #[arg(long = "list-languages")]
    pub list_languages: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref theme) = self.light_theme {
            config.highlight.light_theme = theme.clone();
        }
        if let Some(ref theme) = self.dark_theme {
            config.highlight.dark_theme = theme.clone();
        }
        if let Some(layout) = self.layout {
            config.highlight.layout = layout;
        }
        if self.no_highlight {
            config.features.highlight = false;
        }
        if self.sequential {
            config.features.parallel = false;
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.layout.is_none());
        assert!(!cli.standalone);
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["folio", "test.md"]);
        assert_eq!(cli.files, vec![PathBuf::from("test.md")]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "folio",
            "-l", "debug",
            "--layout", "stacked",
            "--dark-theme", "Solarized (dark)",
            "--standalone",
            "--title", "Notes",
            "a.md",
            "b.md",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.layout, Some(ThemeLayout::Stacked));
        assert_eq!(cli.dark_theme.as_deref(), Some("Solarized (dark)"));
        assert_eq!(cli.title.as_deref(), Some("Notes"));
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_cli_rejects_unknown_layout() {
        assert!(Cli::try_parse_from(["folio", "--layout", "sideways"]).is_err());
    }

    #[test]
    fn test_title_requires_standalone() {
        assert!(Cli::try_parse_from(["folio", "--title", "x"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from([
            "folio",
            "--light-theme", "Solarized (light)",
            "--layout", "stacked",
            "--no-highlight",
            "--sequential",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.highlight.light_theme, "Solarized (light)");
        assert_eq!(config.highlight.dark_theme, folio_config::DEFAULT_DARK_THEME);
        assert_eq!(config.highlight.layout, ThemeLayout::Stacked);
        assert!(!config.features.highlight);
        assert!(!config.features.parallel);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::parse_from(["folio"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }
}
