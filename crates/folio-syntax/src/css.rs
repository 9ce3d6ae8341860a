//! Stylesheet that activates one theme of a dual-theme code block.
//!
//! The light theme is the default. The dark theme takes over under
//! `prefers-color-scheme: dark` or below any element with the `dark` class.

use folio_core::ThemeLayout;

const BASE: &str = r#".folio-code {
  overflow-x: auto;
  padding: 1em;
  border-radius: 6px;
}
.folio-code code {
  font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
}
"#;

const VARIABLES_LIGHT: &str = r#".folio-code {
  color: var(--folio-light);
  background-color: var(--folio-light-bg);
}
.folio-code span {
  color: var(--folio-light);
  font-style: var(--folio-light-font-style, inherit);
  font-weight: var(--folio-light-font-weight, inherit);
  text-decoration: var(--folio-light-text-decoration, inherit);
}
"#;

const VARIABLES_DARK: &str = r#"{sel}.folio-code {
  color: var(--folio-dark);
  background-color: var(--folio-dark-bg);
}
{sel}.folio-code span {
  color: var(--folio-dark);
  font-style: var(--folio-dark-font-style, inherit);
  font-weight: var(--folio-dark-font-weight, inherit);
  text-decoration: var(--folio-dark-text-decoration, inherit);
}
"#;

const STACKED_LIGHT: &str = r#".folio-code-themes .folio-code-dark {
  display: none;
}
"#;

const STACKED_DARK: &str = r#"{sel}.folio-code-themes .folio-code-light {
  display: none;
}
{sel}.folio-code-themes .folio-code-dark {
  display: block;
}
"#;

/// CSS for the given layout.
pub fn stylesheet(layout: ThemeLayout) -> String {
    let (light, dark) = match layout {
        ThemeLayout::Variables => (VARIABLES_LIGHT, VARIABLES_DARK),
        ThemeLayout::Stacked => (STACKED_LIGHT, STACKED_DARK),
    };

    let mut css = String::from(BASE);
    css.push_str(light);
    css.push_str("@media (prefers-color-scheme: dark) {\n");
    for line in dark.replace("{sel}", "").lines() {
        css.push_str("  ");
        css.push_str(line);
        css.push('\n');
    }
    css.push_str("}\n");
    css.push_str(&dark.replace("{sel}", ".dark "));
    css
}
