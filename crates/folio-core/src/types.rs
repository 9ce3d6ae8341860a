//! Span types exchanged by the extract, highlight, and assemble stages.

/// One code block found in rendered HTML.
///
/// `start..end` are byte offsets into the HTML string the span was
/// extracted from and cover exactly `<pre><code ...>...</code></pre>`.
/// Spans from one document never overlap and come in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockSpan {
    /// Byte offset of the opening `<pre>`
    pub start: usize,
    /// Byte offset just past the closing `</pre>`
    pub end: usize,
    /// Language from a `class="language-L"` attribute
    pub language: Option<String>,
    /// Code text as it appears in the HTML (entity-escaped)
    pub escaped_code: String,
}

impl CodeBlockSpan {
    /// Length of the span in bytes, zero if the offsets are reversed.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The substring of `html` this span covers.
    ///
    /// Returns `None` if the offsets do not fit `html`.
    pub fn slice<'a>(&self, html: &'a str) -> Option<&'a str> {
        html.get(self.start..self.end)
    }
}

/// Replacement markup for one [`CodeBlockSpan`].
///
/// The HTML carries both a light and a dark rendering; which one shows is
/// decided by the embedding page's stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedBlock {
    /// Resolved grammar name (e.g. "Rust", "Plain Text")
    pub syntax: String,
    /// Replacement HTML
    pub html: String,
}

impl HighlightedBlock {
    /// Create a highlighted block.
    pub fn new(syntax: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            html: html.into(),
        }
    }
}
