//! HTML entity decoding

use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest entity name we look for between `&` and `;`.
const MAX_ENTITY_LEN: usize = 32;

/// Named entities recognized by [`decode_html_entities`].
static HTML_ENTITIES: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    // Markup-significant characters
    m.insert("amp", '&');
    m.insert("lt", '<');
    m.insert("gt", '>');
    m.insert("quot", '"');
    m.insert("apos", '\'');
    m.insert("nbsp", '\u{a0}');
    // Copyright, trademark, registered
    m.insert("copy", '©');
    m.insert("trade", '™');
    m.insert("reg", '®');
    // Dashes and punctuation
    m.insert("mdash", '—');
    m.insert("ndash", '–');
    m.insert("hellip", '…');
    m.insert("laquo", '«');
    m.insert("raquo", '»');
    m.insert("lsquo", '‘');
    m.insert("rsquo", '’');
    m.insert("ldquo", '“');
    m.insert("rdquo", '”');
    m.insert("bull", '•');
    m.insert("middot", '·');
    m.insert("dagger", '†');
    m.insert("Dagger", '‡');
    m.insert("para", '¶');
    m.insert("sect", '§');
    // Arrows
    m.insert("larr", '←');
    m.insert("rarr", '→');
    m.insert("uarr", '↑');
    m.insert("darr", '↓');
    // Math
    m.insert("times", '×');
    m.insert("divide", '÷');
    m.insert("plusmn", '±');
    m.insert("ne", '≠');
    m.insert("le", '≤');
    m.insert("ge", '≥');
    m.insert("infin", '∞');
    m.insert("deg", '°');
    m.insert("permil", '‰');
    m.insert("prime", '′');
    m.insert("Prime", '″');
    // Currency
    m.insert("euro", '€');
    m.insert("pound", '£');
    m.insert("yen", '¥');
    m.insert("cent", '¢');
    m
});

/// Decode HTML entities in a string.
///
/// Decodes named entities from a fixed table as well as decimal (`&#39;`)
/// and hexadecimal (`&#x27;`) references in a single left-to-right pass,
/// so `&amp;lt;` becomes `&lt;` and never `<`. Anything that does not
/// form a known entity is kept literally.
pub fn decode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_entity(tail) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the entity at the start of `s` (which begins with `&`).
///
/// Returns the decoded character and the number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s
        .bytes()
        .take(MAX_ENTITY_LEN + 2)
        .position(|b| b == b';')?;
    let name = &s[1..semi];

    let decoded = if let Some(num) = name.strip_prefix('#') {
        let codepoint = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        char::from_u32(codepoint).filter(|&c| c != '\0')?
    } else {
        *HTML_ENTITIES.get(name)?
    };

    Some((decoded, semi + 1))
}
