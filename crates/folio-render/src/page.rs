//! Standalone HTML page around a rendered fragment.

use folio_core::{escape_html, ThemeLayout};
use folio_syntax::stylesheet;

/// Wrap `fragment` in a complete HTML document.
///
/// The page embeds the code block stylesheet for `layout`, so both theme
/// renderings work without any further CSS.
pub fn render_page(title: &str, fragment: &str, layout: ThemeLayout) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}</style>
</head>
<body>
<main>
{fragment}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        css = stylesheet(layout),
        fragment = fragment,
    )
}
