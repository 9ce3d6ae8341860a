//! Code block extraction from rendered HTML.
//!
//! Finds every `<pre><code>` or `<pre><code class="language-L">` element
//! and records its byte range, language and escaped body. The language is
//! whatever sits between the quotes, entity-decoded, so any fence info
//! word the serializer writes comes back out unchanged. Markup that
//! matches this shape inside raw HTML is picked up as well; the scan does
//! not know where a block came from.

use folio_core::CodeBlockSpan;
use folio_parser::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

/// Opening tag with an optional `language-L` class, the body, and the
/// nearest closing `</code></pre>`. Attribute values are escaped, so `L`
/// never contains a literal `"`.
static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code(?:\s+class="language-([^"]+)")?>(.*?)</code></pre>"#)
        .unwrap()
});

/// Find the code blocks in `html`, in document order.
///
/// Returned spans never overlap.
///
/// # Example
///
/// ```
/// let html = r#"<p>x</p><pre><code class="language-go">a</code></pre>"#;
/// let spans = folio_render::extract(html);
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].language.as_deref(), Some("go"));
/// assert_eq!(spans[0].start, 8);
/// ```
pub fn extract(html: &str) -> Vec<CodeBlockSpan> {
    CODE_BLOCK_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(CodeBlockSpan {
                start: whole.start(),
                end: whole.end(),
                language: caps.get(1).map(|m| decode_html_entities(m.as_str())),
                escaped_code: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            })
        })
        .collect()
}
