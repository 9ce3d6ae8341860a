//! Bare URL autolinking (GFM "extended autolinks").
//!
//! CommonMark only links `<https://...>`; GFM additionally links bare
//! `https://`, `http://` and `www.` URLs that appear in running text.
//! This pass runs over the finished tree and splits [`Inline::Text`] runs
//! into text and [`Inline::Autolink`] pieces. It never descends into
//! links, images, code, or raw HTML.

use folio_core::{Block, Document, Inline};
use regex::Regex;
use std::sync::LazyLock;

/// A URL candidate: scheme or `www.` at a word boundary, up to whitespace or `<`.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s*_~(])((?:https?://|www\.)[^\s<]+)").unwrap()
});

/// Link bare URLs throughout a document.
pub fn link_document(doc: &mut Document) {
    link_blocks(&mut doc.blocks);
}

fn link_blocks(blocks: &mut [Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(inlines) | Block::Plain(inlines) => link_inlines(inlines),
            Block::Heading { content, .. } => link_inlines(content),
            Block::BlockQuote(children) => link_blocks(children),
            Block::List { items, .. } => {
                for item in items {
                    link_blocks(&mut item.blocks);
                }
            }
            Block::Table { header, rows, .. } => {
                for cell in header.iter_mut().chain(rows.iter_mut().flatten()) {
                    link_inlines(cell);
                }
            }
            Block::ThematicBreak | Block::CodeBlock { .. } | Block::RawHtml(_) => {}
        }
    }
}

fn link_inlines(inlines: &mut Vec<Inline>) {
    let mut out = Vec::with_capacity(inlines.len());
    for inline in inlines.drain(..) {
        match inline {
            Inline::Text(text) => out.extend(split_urls(&text)),
            Inline::Emphasis(mut children) => {
                link_inlines(&mut children);
                out.push(Inline::Emphasis(children));
            }
            Inline::Strong(mut children) => {
                link_inlines(&mut children);
                out.push(Inline::Strong(children));
            }
            Inline::Strikethrough(mut children) => {
                link_inlines(&mut children);
                out.push(Inline::Strikethrough(children));
            }
            other => out.push(other),
        }
    }
    *inlines = out;
}

/// Split a text run into text and autolink pieces.
///
/// Returns a single `Text` when the run holds no URL.
pub fn split_urls(text: &str) -> Vec<Inline> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for caps in URL_RE.captures_iter(text) {
        let Some(candidate) = caps.get(1) else {
            continue;
        };
        let url = trim_url(candidate.as_str());
        if !has_host(url) {
            continue;
        }

        let start = candidate.start();
        let end = start + url.len();
        if start > cursor {
            pieces.push(Inline::Text(text[cursor..start].to_string()));
        }
        pieces.push(Inline::Autolink {
            href: href_for(url),
            text: url.to_string(),
        });
        cursor = end;
    }

    if cursor < text.len() || pieces.is_empty() {
        pieces.push(Inline::Text(text[cursor..].to_string()));
    }
    pieces
}

/// Drop trailing punctuation and unbalanced closing parentheses.
fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let trim = match last {
            '?' | '!' | '.' | ',' | ':' | ';' | '*' | '_' | '~' | '\'' | '"' => true,
            ')' => url.matches(')').count() > url.matches('(').count(),
            _ => false,
        };
        if !trim {
            return url;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
}

/// Require at least one character of host after the prefix.
fn has_host(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let host = ["https://", "http://", "www."]
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
        .unwrap_or("");
    host.chars().next().is_some_and(|c| c.is_alphanumeric())
}

fn href_for(url: &str) -> String {
    if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
        format!("http://{}", url)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autolink(href: &str, text: &str) -> Inline {
        Inline::Autolink {
            href: href.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_no_url() {
        assert_eq!(split_urls("plain"), vec![Inline::Text("plain".into())]);
        assert_eq!(split_urls(""), vec![Inline::Text(String::new())]);
    }

    #[test]
    fn test_url_in_sentence() {
        assert_eq!(
            split_urls("see https://example.com/a?b=1 for more"),
            vec![
                Inline::Text("see ".into()),
                autolink("https://example.com/a?b=1", "https://example.com/a?b=1"),
                Inline::Text(" for more".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(
            split_urls("Visit www.example.com."),
            vec![
                Inline::Text("Visit ".into()),
                autolink("http://www.example.com", "www.example.com"),
                Inline::Text(".".into()),
            ]
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            split_urls("(https://en.wikipedia.org/wiki/Rust_(language))"),
            vec![
                Inline::Text("(".into()),
                autolink(
                    "https://en.wikipedia.org/wiki/Rust_(language)",
                    "https://en.wikipedia.org/wiki/Rust_(language)"
                ),
                Inline::Text(")".into()),
            ]
        );
    }

    #[test]
    fn test_requires_host() {
        assert_eq!(split_urls("https://"), vec![Inline::Text("https://".into())]);
        assert_eq!(split_urls("www."), vec![Inline::Text("www.".into())]);
    }

    #[test]
    fn test_not_mid_word() {
        assert_eq!(
            split_urls("xhttps://example.com"),
            vec![Inline::Text("xhttps://example.com".into())]
        );
    }

    #[test]
    fn test_two_urls() {
        let pieces = split_urls("http://a.io http://b.io");
        assert_eq!(
            pieces,
            vec![
                autolink("http://a.io", "http://a.io"),
                Inline::Text(" ".into()),
                autolink("http://b.io", "http://b.io"),
            ]
        );
    }

    #[test]
    fn test_skips_existing_links() {
        let mut doc = Document::new(vec![Block::Paragraph(vec![
            Inline::Link {
                href: "https://a.io".into(),
                title: None,
                content: vec![Inline::Text("https://a.io".into())],
            },
            Inline::Code("https://b.io".into()),
            Inline::Strong(vec![Inline::Text("https://c.io".into())]),
        ])]);
        link_document(&mut doc);

        let Block::Paragraph(inlines) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(matches!(inlines[0], Inline::Link { .. }));
        assert_eq!(inlines[1], Inline::Code("https://b.io".into()));
        assert_eq!(
            inlines[2],
            Inline::Strong(vec![autolink("https://c.io", "https://c.io")])
        );
    }
}
