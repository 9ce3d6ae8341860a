//! Dual-theme tokenization.
//!
//! A code block is parsed once per line; the scope stack carries over from
//! one line to the next so block comments and multi-line strings keep their
//! scope. Each token is then styled under both themes.

use folio_core::{FolioError, Result};
use syntect::highlighting::{Highlighter as ThemeHighlighter, Style, Theme};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};

/// A run of text with its style under the light and the dark theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualToken {
    pub text: String,
    pub light: Style,
    pub dark: Style,
}

impl DualToken {
    /// Whether the token holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// One source line worth of tokens.
pub type TokenLine = Vec<DualToken>;

/// Tokenize `code` with `syntax`, styling every token under both themes.
///
/// Adjacent tokens that look the same under both themes are merged.
/// The returned lines carry no line terminators.
pub fn tokenize(
    syntax_set: &SyntaxSet,
    syntax: &SyntaxReference,
    light: &Theme,
    dark: &Theme,
    code: &str,
) -> Result<Vec<TokenLine>> {
    let light_hl = ThemeHighlighter::new(light);
    let dark_hl = ThemeHighlighter::new(dark);

    let mut state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut styles = (
        light_hl.style_for_stack(stack.as_slice()),
        dark_hl.style_for_stack(stack.as_slice()),
    );

    let mut lines = Vec::new();
    for line in code.lines() {
        // Grammars loaded with `load_defaults_newlines` expect the terminator
        let ops = state
            .parse_line(&format!("{line}\n"), syntax_set)
            .map_err(|e| FolioError::Highlight(e.to_string()))?;

        let mut tokens = TokenLine::new();
        let mut cursor = 0;
        for (pos, op) in ops {
            let pos = pos.min(line.len());
            if pos > cursor {
                push_token(&mut tokens, &line[cursor..pos], styles);
                cursor = pos;
            }
            stack
                .apply(&op)
                .map_err(|e| FolioError::Highlight(format!("scope stack: {e:?}")))?;
            styles = (
                light_hl.style_for_stack(stack.as_slice()),
                dark_hl.style_for_stack(stack.as_slice()),
            );
        }
        if cursor < line.len() {
            push_token(&mut tokens, &line[cursor..], styles);
        }

        lines.push(tokens);
    }

    Ok(lines)
}

fn push_token(tokens: &mut TokenLine, text: &str, (light, dark): (Style, Style)) {
    if let Some(last) = tokens.last_mut() {
        if last.light == light && last.dark == dark {
            last.text.push_str(text);
            return;
        }
    }
    tokens.push(DualToken {
        text: text.to_string(),
        light,
        dark,
    });
}
