//! Splice highlighted blocks back into the rendered HTML.

use folio_core::{CodeBlockSpan, HighlightedBlock};
use log::warn;

/// Rebuild `html` with every span replaced by its highlighted block.
///
/// The output is built once, left to right. Text outside the spans is
/// copied byte-for-byte. Spans must be sorted and must not overlap.
///
/// # Example
///
/// ```
/// use folio_core::{CodeBlockSpan, HighlightedBlock};
///
/// let html = "<p>a</p><pre><code>x</code></pre><p>b</p>";
/// let span = CodeBlockSpan { start: 8, end: 33, language: None, escaped_code: "x".into() };
/// let block = HighlightedBlock::new("Plain Text", "<pre class=\"folio-code\">x</pre>");
/// assert_eq!(
///     folio_render::assemble(html, &[(span, block)]),
///     "<p>a</p><pre class=\"folio-code\">x</pre><p>b</p>"
/// );
/// ```
pub fn assemble(html: &str, blocks: &[(CodeBlockSpan, HighlightedBlock)]) -> String {
    let replaced: usize = blocks.iter().map(|(_, block)| block.html.len()).sum();
    let mut out = String::with_capacity(html.len() + replaced);
    let mut cursor = 0;

    for (span, block) in blocks {
        debug_assert!(
            span.start >= cursor && span.start <= span.end,
            "code block spans must be sorted and non-overlapping"
        );
        let (Some(before), Some(_)) = (html.get(cursor..span.start), span.slice(html)) else {
            warn!("Skipping invalid code block span {}..{}", span.start, span.end);
            continue;
        };
        out.push_str(before);
        out.push_str(&block.html);
        cursor = span.end;
    }

    out.push_str(&html[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    fn replace_all(html: &str, f: impl Fn(&CodeBlockSpan) -> String) -> String {
        let pairs: Vec<_> = extract(html)
            .into_iter()
            .map(|span| {
                let block = HighlightedBlock::new("x", f(&span));
                (span, block)
            })
            .collect();
        assemble(html, &pairs)
    }

    #[test]
    fn test_no_spans_is_identity() {
        let html = "<p>unchanged &amp; intact</p>";
        assert_eq!(assemble(html, &[]), html);
    }

    #[test]
    fn test_replaces_in_order() {
        let html = "<h1>t</h1>\n<pre><code class=\"language-js\">1</code></pre>\n<p>mid</p>\n<pre><code>2</code></pre>\n<p>end</p>";
        let out = replace_all(html, |span| format!("[{}]", span.escaped_code));
        assert_eq!(out, "<h1>t</h1>\n[1]\n<p>mid</p>\n[2]\n<p>end</p>");
    }

    #[test]
    fn test_adjacent_spans() {
        let html = "<pre><code>a</code></pre><pre><code>b</code></pre>";
        let out = replace_all(html, |span| span.escaped_code.to_uppercase());
        assert_eq!(out, "AB");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        let html = "<p>héllo ✓</p><pre><code>x</code></pre><p>ünïcode</p>";
        let out = replace_all(html, |_| "<X>".into());
        assert_eq!(out, "<p>héllo ✓</p><X><p>ünïcode</p>");
    }
}
