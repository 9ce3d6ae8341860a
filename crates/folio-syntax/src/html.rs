//! HTML output for dual-theme token lines.
//!
//! Two layouts are supported:
//!
//! - **Variables**: one `<pre>` tree. Every styled token carries its light
//!   and dark color as CSS custom properties (`--folio-light`,
//!   `--folio-dark`) and the page stylesheet picks one.
//! - **Stacked**: two complete `<pre>` trees with inline colors, wrapped in
//!   a `<div class="folio-code-themes">`. The stylesheet hides one of them.
//!
//! Token backgrounds are ignored; the block background comes from the theme.

use crate::tokens::{DualToken, TokenLine};
use folio_core::escape_html;
use std::fmt::Write;
use syntect::highlighting::{Color, FontStyle, Style};

/// Foreground and background of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub foreground: Color,
    pub background: Color,
}

/// Block-level colors for both themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn css_color(color: Color) -> String {
    if color.a == 0xFF {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r, color.g, color.b, color.a
        )
    }
}

/// Render the single-tree layout.
pub fn write_variables(lines: &[TokenLine], language: &str, palette: &Palette) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<pre class="folio-code" data-lang="{}" style="--folio-light:{};--folio-dark:{};--folio-light-bg:{};--folio-dark-bg:{}" tabindex="0"><code>"#,
        escape_html(language),
        css_color(palette.light.foreground),
        css_color(palette.dark.foreground),
        css_color(palette.light.background),
        css_color(palette.dark.background),
    );
    write_lines(&mut out, lines, |token| variables_style(token, palette));
    out.push_str("</code></pre>");
    out
}

/// Render the two-tree layout.
pub fn write_stacked(lines: &[TokenLine], language: &str, palette: &Palette) -> String {
    let mut out = String::from(r#"<div class="folio-code-themes">"#);
    write_single(&mut out, lines, language, "light", &palette.light, |t| t.light);
    write_single(&mut out, lines, language, "dark", &palette.dark, |t| t.dark);
    out.push_str("</div>");
    out
}

fn write_single<F>(
    out: &mut String,
    lines: &[TokenLine],
    language: &str,
    variant: &str,
    colors: &ThemeColors,
    pick: F,
) where
    F: Fn(&DualToken) -> Style,
{
    let _ = write!(
        out,
        r#"<pre class="folio-code folio-code-{}" data-lang="{}" style="color:{};background-color:{}" tabindex="0"><code>"#,
        variant,
        escape_html(language),
        css_color(colors.foreground),
        css_color(colors.background),
    );
    write_lines(out, lines, |token| inline_style(pick(token), colors.foreground));
    out.push_str("</code></pre>");
}

/// Write every line as a `<span class="line">`, joined by newlines.
///
/// Consecutive tokens with the same style attribute share one span;
/// whitespace joins the span that is already open.
fn write_lines<F>(out: &mut String, lines: &[TokenLine], style_attr: F)
where
    F: Fn(&DualToken) -> Option<String>,
{
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(r#"<span class="line">"#);

        let mut current: Option<String> = None;
        let mut run = String::new();
        for token in line {
            let attr = if token.is_blank() && !run.is_empty() {
                current.clone()
            } else {
                style_attr(token)
            };
            if attr != current && !run.is_empty() {
                flush(out, current.as_deref(), &run);
                run.clear();
            }
            current = attr;
            push_escaped(&mut run, &token.text);
        }
        if !run.is_empty() {
            flush(out, current.as_deref(), &run);
        }

        out.push_str("</span>");
    }
}

fn flush(out: &mut String, style: Option<&str>, text: &str) {
    match style {
        Some(style) => {
            let _ = write!(out, r#"<span style="{}">{}</span>"#, style, text);
        }
        None => out.push_str(text),
    }
}

/// Custom properties for one token, or `None` when it looks like the
/// surrounding block under both themes.
fn variables_style(token: &DualToken, palette: &Palette) -> Option<String> {
    let plain = token.light.foreground == palette.light.foreground
        && token.dark.foreground == palette.dark.foreground
        && token.light.font_style.is_empty()
        && token.dark.font_style.is_empty();
    if plain {
        return None;
    }

    let mut style = format!(
        "--folio-light:{};--folio-dark:{}",
        css_color(token.light.foreground),
        css_color(token.dark.foreground)
    );
    push_font_vars(&mut style, "light", token.light.font_style);
    push_font_vars(&mut style, "dark", token.dark.font_style);
    Some(style)
}

fn push_font_vars(style: &mut String, variant: &str, font: FontStyle) {
    if font.contains(FontStyle::ITALIC) {
        let _ = write!(style, ";--folio-{variant}-font-style:italic");
    }
    if font.contains(FontStyle::BOLD) {
        let _ = write!(style, ";--folio-{variant}-font-weight:bold");
    }
    if font.contains(FontStyle::UNDERLINE) {
        let _ = write!(style, ";--folio-{variant}-text-decoration:underline");
    }
}

fn inline_style(style: Style, default_fg: Color) -> Option<String> {
    if style.foreground == default_fg && style.font_style.is_empty() {
        return None;
    }

    let mut css = format!("color:{}", css_color(style.foreground));
    if style.font_style.contains(FontStyle::ITALIC) {
        css.push_str(";font-style:italic");
    }
    if style.font_style.contains(FontStyle::BOLD) {
        css.push_str(";font-weight:bold");
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        css.push_str(";text-decoration:underline");
    }
    Some(css)
}

/// Escape token text. Single quotes are escaped too.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
