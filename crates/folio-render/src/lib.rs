//! Folio Render
//!
//! The Markdown to HTML pipeline:
//!
//! 1. **Parse** Markdown into a [`Document`](folio_core::Document) tree
//! 2. **Serialize** the tree to an HTML fragment ([`serialize`])
//! 3. **Extract** the `<pre><code>` blocks from that HTML ([`extract`])
//! 4. **Highlight** each block for a light and a dark theme
//! 5. **Assemble** the final HTML in one pass ([`assemble`])
//!
//! From stage 2 on only the flat HTML string and span objects move between
//! stages.
//!
//! # Raw HTML
//!
//! Raw HTML in the source is copied into the output verbatim and is not
//! sanitized. Only render Markdown you trust, or sanitize the output.
//!
//! # Example
//!
//! ```
//! let html = folio_render::render("hello world").unwrap();
//! assert_eq!(html, "<p>hello world</p>");
//! ```

pub mod assemble;
pub mod extract;
pub mod html;
pub mod page;

pub use assemble::assemble;
pub use extract::extract;
pub use html::serialize;
pub use page::render_page;

use folio_config::{Config, FeaturesConfig};
use folio_core::{CodeBlockSpan, HighlightedBlock, Result, ThemeLayout};
use folio_parser::{Parser, ParserOptions};
use folio_syntax::{load_themes, Highlighter};
use log::debug;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Settings a [`Renderer`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// GFM extensions
    pub parser: ParserOptions,
    /// Run the extract/highlight/assemble stages
    pub highlight: bool,
    /// Highlight blocks on the rayon pool
    pub parallel: bool,
    pub light_theme: String,
    pub dark_theme: String,
    pub layout: ThemeLayout,
    /// Extra `.tmTheme` directory
    pub theme_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RenderConfig {
    fn from(config: &Config) -> Self {
        Self {
            parser: parser_options(&config.features),
            highlight: config.features.highlight,
            parallel: config.features.parallel,
            light_theme: config.highlight.light_theme.clone(),
            dark_theme: config.highlight.dark_theme.clone(),
            layout: config.highlight.layout,
            theme_dir: config.highlight.theme_dir.clone(),
        }
    }
}

/// Parser options for a `[features]` section.
pub fn parser_options(features: &FeaturesConfig) -> ParserOptions {
    ParserOptions {
        tables: features.tables,
        strikethrough: features.strikethrough,
        tasklists: features.tasklists,
        autolinks: features.autolinks,
    }
}

/// Markdown to HTML renderer.
///
/// Construction loads the grammars and both themes; after that a renderer
/// is immutable and can be shared between threads.
#[derive(Debug)]
pub struct Renderer {
    parser: Parser,
    /// `None` when highlighting is disabled
    highlighter: Option<Highlighter>,
    parallel: bool,
    layout: ThemeLayout,
}

impl Renderer {
    /// Build a renderer.
    ///
    /// # Errors
    ///
    /// `ThemeNotFound` when a configured theme does not exist, `Config`
    /// when the theme directory cannot be read.
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let highlighter = if config.highlight {
            let themes = load_themes(config.theme_dir.as_deref())?;
            let highlighter =
                Highlighter::from_theme_set(themes, &config.light_theme, &config.dark_theme)?
                    .with_layout(config.layout);
            Some(highlighter)
        } else {
            None
        };

        Ok(Self {
            parser: Parser::with_options(config.parser),
            highlighter,
            parallel: config.parallel,
            layout: config.layout,
        })
    }

    /// Build a renderer from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&RenderConfig::from(config))
    }

    /// The highlighter, if highlighting is enabled.
    pub fn highlighter(&self) -> Option<&Highlighter> {
        self.highlighter.as_ref()
    }

    /// The code block layout.
    pub fn layout(&self) -> ThemeLayout {
        self.layout
    }

    /// Render Markdown to an HTML fragment.
    ///
    /// # Errors
    ///
    /// `Highlight` when a grammar fails on a code block. Parsing and
    /// serializing never fail.
    pub fn render(&self, source: &str) -> Result<String> {
        let doc = self.parser.parse(source);
        let html = serialize(&doc);

        let Some(highlighter) = &self.highlighter else {
            return Ok(html);
        };

        let spans = extract(&html);
        if spans.is_empty() {
            return Ok(html);
        }
        debug!(
            "Highlighting {} code blocks in {} bytes of HTML",
            spans.len(),
            html.len()
        );

        let blocks = self.highlight_spans(highlighter, &spans)?;
        let pairs: Vec<(CodeBlockSpan, HighlightedBlock)> = spans.into_iter().zip(blocks).collect();
        Ok(assemble(&html, &pairs))
    }

    /// Render UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// `InvalidUtf8` before any parsing when `bytes` is not valid UTF-8.
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<String> {
        let source = std::str::from_utf8(bytes)?;
        self.render(source)
    }

    /// Highlight every span; results keep the order of `spans`.
    fn highlight_spans(
        &self,
        highlighter: &Highlighter,
        spans: &[CodeBlockSpan],
    ) -> Result<Vec<HighlightedBlock>> {
        let one = |span: &CodeBlockSpan| {
            highlighter.highlight(&span.escaped_code, span.language.as_deref())
        };

        if self.parallel && spans.len() > 1 {
            spans.par_iter().map(one).collect()
        } else {
            spans.iter().map(one).collect()
        }
    }
}

/// Render Markdown with the default configuration.
///
/// The default renderer is built on first use and reused afterwards.
pub fn render(source: &str) -> Result<String> {
    default_renderer()?.render(source)
}

fn default_renderer() -> Result<&'static Renderer> {
    static DEFAULT: OnceLock<Renderer> = OnceLock::new();

    if let Some(renderer) = DEFAULT.get() {
        return Ok(renderer);
    }
    let renderer = Renderer::new(&RenderConfig::default())?;
    Ok(DEFAULT.get_or_init(|| renderer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::FolioError;

    fn renderer(config: RenderConfig) -> Renderer {
        Renderer::new(&config).unwrap()
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render("hello world").unwrap(), "<p>hello world</p>");
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.starts_with(r#"<pre class="folio-code" data-lang="rust""#));
        assert!(!html.contains("<pre><code"));
    }

    #[test]
    fn test_highlight_disabled() {
        let r = renderer(RenderConfig {
            highlight: false,
            ..RenderConfig::default()
        });
        assert!(r.highlighter().is_none());
        assert_eq!(
            r.render("```rust\nfn main() {}\n```").unwrap(),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let source = "```js\nlet a = 1;\n```\n\ntext\n\n```go\nfunc main() {}\n```\n\n```\nplain\n```";
        let parallel = renderer(RenderConfig::default()).render(source).unwrap();
        let sequential = renderer(RenderConfig {
            parallel: false,
            ..RenderConfig::default()
        })
        .render(source)
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_stacked_layout() {
        let r = renderer(RenderConfig {
            layout: ThemeLayout::Stacked,
            ..RenderConfig::default()
        });
        let html = r.render("```\nx\n```").unwrap();
        assert!(html.starts_with(r#"<div class="folio-code-themes">"#));
    }

    #[test]
    fn test_missing_theme() {
        let err = Renderer::new(&RenderConfig {
            dark_theme: "no-such-theme".into(),
            ..RenderConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, FolioError::ThemeNotFound { .. }));
    }

    #[test]
    fn test_missing_theme_ignored_without_highlighting() {
        let config = RenderConfig {
            highlight: false,
            dark_theme: "no-such-theme".into(),
            ..RenderConfig::default()
        };
        assert!(Renderer::new(&config).is_ok());
    }

    #[test]
    fn test_render_bytes() {
        let r = renderer(RenderConfig::default());
        assert_eq!(r.render_bytes(b"*hi*").unwrap(), "<p><em>hi</em></p>");
        let err = r.render_bytes(&[0x66, 0x6f, 0xff]).unwrap_err();
        assert!(matches!(err, FolioError::InvalidUtf8(_)));
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_toml("[features]\nStrikethrough = false").unwrap();
        let r = Renderer::from_config(&config).unwrap();
        assert_eq!(r.render("~~x~~").unwrap(), "<p>~~x~~</p>");
    }

    #[test]
    fn test_parser_options() {
        let features = FeaturesConfig::all_disabled();
        assert_eq!(parser_options(&features), ParserOptions::commonmark());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
