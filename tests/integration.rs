//! End-to-end tests for folio.
//!
//! These tests run the whole pipeline (parse, serialize, extract,
//! highlight, assemble) and check the properties callers rely on.

use folio_config::Config;
use folio_core::{FolioError, ThemeLayout};
use folio_render::{extract, render, RenderConfig, Renderer};

fn renderer_with(f: impl FnOnce(&mut RenderConfig)) -> Renderer {
    let mut config = RenderConfig::default();
    f(&mut config);
    Renderer::new(&config).unwrap()
}

/// Visible text of an HTML fragment with tags removed and the common
/// entities decoded.
fn visible_text(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    folio_parser::decode_html_entities(&out)
}

// =============================================================================
// Core properties
// =============================================================================

#[test]
fn test_plain_text_round_trip() {
    assert_eq!(render("hello world").unwrap(), "<p>hello world</p>");
}

#[test]
fn test_adjacent_fences_stay_separate() {
    let html = render("```js\nconst a=1;\n```\n```go\nfunc f(){}\n```").unwrap();

    assert_eq!(html.matches("<pre class=\"folio-code\"").count(), 2);
    let (first, second) = html.split_once("</pre>").unwrap();
    assert!(first.contains("data-lang=\"js\""));
    assert!(!first.contains("func"));
    assert!(second.contains("data-lang=\"go\""));
    assert!(!second.contains("const"));

    assert_eq!(visible_text(first), "const a=1;");
    assert_eq!(visible_text(second).trim(), "func f(){}");
}

#[test]
fn test_script_in_code_is_not_live() {
    let html = render("```html\n<script>alert(1)</script>\n```").unwrap();
    assert!(!html.contains("<script"));
    assert!(!html.contains("</script>"));
    assert!(html.contains("&lt;"));
    assert_eq!(visible_text(&html), "<script>alert(1)</script>");
}

#[test]
fn test_script_in_unlabelled_code_is_not_live() {
    let html = render("```\n<script>alert(1)</script>\n```").unwrap();
    assert!(!html.contains("<script"));
}

#[test]
fn test_raw_html_passthrough() {
    let html = render("<div class=\"note\">x</div>\n\nafter").unwrap();
    assert_eq!(html, "<div class=\"note\">x</div>\n<p>after</p>");
}

#[test]
fn test_unknown_language_renders_both_themes() {
    let html = render("```klingon\nqapla'\n```").unwrap();
    assert!(html.contains("data-lang=\"klingon\""));
    assert!(html.contains("--folio-light:"));
    assert!(html.contains("--folio-dark:"));
    assert!(!html.contains("<pre><code"));
    assert!(html.contains("qapla&#39;"));
}

#[test]
fn test_punctuated_info_words_are_highlighted() {
    for (source, lang) in [
        ("```rust,ignore\nfn x() {}\n```", "rust,ignore"),
        ("```{r}\nx <- 1\n```", "{r}"),
        ("```c/c++\nint a;\n```", "c/c++"),
    ] {
        let html = render(source).unwrap();
        assert!(html.starts_with("<pre class=\"folio-code\""), "{html}");
        assert!(html.contains(&format!("data-lang=\"{lang}\"")), "{html}");
        assert!(html.contains("--folio-dark:"), "{html}");
        assert!(!html.contains("<pre><code"), "{html}");
    }
}

#[test]
fn test_quoted_info_word_is_highlighted() {
    let html = render("```a\"b&c\nx\n```").unwrap();
    assert!(html.contains("data-lang=\"a&quot;b&amp;c\""), "{html}");
    assert!(!html.contains("<pre><code"));
}

#[test]
fn test_render_is_deterministic() {
    let source = "# Title\n\n```rust\nfn main() {}\n```\n\n| a | b |\n|:-|-:|\n| 1 | 2 |\n\n```python\nprint('x')\n```";
    let first = render(source).unwrap();
    let second = render(source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_table_and_strikethrough_together() {
    let html = render("| Left | Center | Right |\n|:-----|:------:|------:|\n| a | ~~b~~ | c |").unwrap();
    assert!(html.starts_with("<table>\n<thead>"));
    assert!(html.contains("<th align=\"left\">Left</th>"));
    assert!(html.contains("<th align=\"center\">Center</th>"));
    assert!(html.contains("<th align=\"right\">Right</th>"));
    assert!(html.contains("<td align=\"center\"><del>b</del></td>"));
}

// =============================================================================
// GFM and structure
// =============================================================================

#[test]
fn test_tight_and_loose_lists() {
    assert_eq!(
        render("- a\n- b").unwrap(),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
    assert_eq!(
        render("- a\n\n- b").unwrap(),
        "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>"
    );
}

#[test]
fn test_ordered_list_start() {
    assert_eq!(
        render("3. three\n4. four").unwrap(),
        "<ol start=\"3\">\n<li>three</li>\n<li>four</li>\n</ol>"
    );
    assert!(render("1. one").unwrap().starts_with("<ol>\n"));
}

#[test]
fn test_task_list() {
    let html = render("- [x] done\n- [ ] todo").unwrap();
    assert!(html.contains("<input type=\"checkbox\" disabled checked> done"));
    assert!(html.contains("<input type=\"checkbox\" disabled> todo"));
}

#[test]
fn test_loose_task_list() {
    assert_eq!(
        render("- [x] a\n\n- [ ] b").unwrap(),
        "<ul>\n<li class=\"task-list-item\">\n<p><input type=\"checkbox\" disabled checked> a</p>\n</li>\n<li class=\"task-list-item\">\n<p><input type=\"checkbox\" disabled> b</p>\n</li>\n</ul>"
    );
}

#[test]
fn test_bare_url_autolink() {
    let html = render("See https://example.com/a_b, or www.example.org.").unwrap();
    assert_eq!(
        html,
        "<p>See <a href=\"https://example.com/a_b\">https://example.com/a_b</a>, or <a href=\"http://www.example.org\">www.example.org</a>.</p>"
    );
}

#[test]
fn test_angle_and_email_autolinks() {
    let html = render("<https://example.com> and <me@example.com>").unwrap();
    assert!(html.contains("<a href=\"https://example.com\">https://example.com</a>"));
    assert!(html.contains("<a href=\"mailto:me@example.com\">me@example.com</a>"));
}

#[test]
fn test_code_spans_are_not_highlighted() {
    assert_eq!(
        render("use `<pre><code>` here").unwrap(),
        "<p>use <code>&lt;pre&gt;&lt;code&gt;</code> here</p>"
    );
}

#[test]
fn test_indented_code_block() {
    let html = render("para\n\n    indented code\n").unwrap();
    assert!(html.contains("data-lang=\"text\""));
    assert!(html.contains("indented code"));
}

#[test]
fn test_raw_pre_code_is_highlighted_too() {
    // User-authored markup of the same shape is indistinguishable from a
    // generated block and gets highlighted as well
    let html = render("<div><pre><code>raw</code></pre></div>").unwrap();
    assert!(html.starts_with("<div><pre class=\"folio-code\""));
    assert!(html.ends_with("</div>"));
}

// =============================================================================
// Multi-line highlighting
// =============================================================================

#[test]
fn test_block_comment_highlighting_continues() {
    let html = render("```rust\n/* a\nb\n*/\nfn x() {}\n```").unwrap();
    let lines: Vec<&str> = html.split('\n').collect();
    assert_eq!(lines.len(), 4);
    // The bare `b` line is still inside the comment, so it is styled
    assert!(lines[1].contains("<span style="));
}

#[test]
fn test_highlighted_output_is_not_reextracted() {
    let html = render("```rust\nlet x = 1;\n```").unwrap();
    assert!(extract(&html).is_empty());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_stacked_layout() {
    let renderer = renderer_with(|c| c.layout = ThemeLayout::Stacked);
    let html = renderer.render("```js\nlet a;\n```").unwrap();
    assert!(html.starts_with("<div class=\"folio-code-themes\">"));
    assert_eq!(html.matches("<pre ").count(), 2);
}

#[test]
fn test_custom_themes() {
    let renderer = renderer_with(|c| {
        c.light_theme = "Solarized (light)".into();
        c.dark_theme = "Solarized (dark)".into();
    });
    let default = render("```rust\nfn a() {}\n```").unwrap();
    let custom = renderer.render("```rust\nfn a() {}\n```").unwrap();
    assert_ne!(default, custom);
}

#[test]
fn test_missing_theme_is_reported() {
    let err = Renderer::new(&RenderConfig {
        light_theme: "No Such Theme".into(),
        ..RenderConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, FolioError::ThemeNotFound { ref name } if name == "No Such Theme"));
    assert!(err.is_infrastructure());
}

#[test]
fn test_invalid_utf8() {
    let renderer = Renderer::from_config(&Config::default()).unwrap();
    let err = renderer.render_bytes(b"ok \xF0\x28\x8C\x28").unwrap_err();
    assert!(matches!(err, FolioError::InvalidUtf8(_)));
}

#[test]
fn test_features_from_config() {
    let config = Config::from_toml(
        r#"
        [features]
        Tables = false
        Autolinks = false
        Highlight = false
        "#,
    )
    .unwrap();
    let renderer = Renderer::from_config(&config).unwrap();

    let html = renderer.render("| a |\n|---|\n| 1 |").unwrap();
    assert!(!html.contains("<table>"));

    let html = renderer.render("https://example.com").unwrap();
    assert_eq!(html, "<p>https://example.com</p>");

    let html = renderer.render("```rust\nx\n```").unwrap();
    assert_eq!(html, "<pre><code class=\"language-rust\">x\n</code></pre>");
}

#[test]
fn test_shared_renderer_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::from_config(&Config::default()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render(&format!("```rust\nlet x = {i};\n```")))
        })
        .collect();
    for handle in handles {
        let html = handle.join().unwrap().unwrap();
        assert!(html.contains("folio-code"));
    }
}
