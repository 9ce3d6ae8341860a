//! Document tree to HTML.
//!
//! Output is deterministic. Block elements are separated by a single
//! newline and the fragment has no trailing newline. Text, code and
//! attribute values are escaped; raw HTML nodes are copied verbatim.

use folio_core::{escape_html, Alignment, Block, Document, Inline, ListItem, ListKind, TableCell};

/// Serialize a document to an HTML fragment.
///
/// # Example
///
/// ```
/// let doc = folio_parser::parse("hello world");
/// assert_eq!(folio_render::serialize(&doc), "<p>hello world</p>");
/// ```
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_blocks(&mut out, &doc.blocks);
    out
}

fn write_blocks(out: &mut String, blocks: &[Block]) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(out, block);
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(content) => {
            out.push_str("<p>");
            write_inlines(out, content);
            out.push_str("</p>");
        }
        Block::Plain(content) => write_inlines(out, content),
        Block::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>"));
            write_inlines(out, content);
            out.push_str(&format!("</h{level}>"));
        }
        Block::List { kind, items, .. } => write_list(out, *kind, items),
        Block::BlockQuote(children) => {
            out.push_str("<blockquote>\n");
            write_blocks(out, children);
            if !children.is_empty() {
                out.push('\n');
            }
            out.push_str("</blockquote>");
        }
        Block::ThematicBreak => out.push_str("<hr>"),
        Block::CodeBlock { language, code } => {
            match language {
                Some(lang) => {
                    out.push_str("<pre><code class=\"language-");
                    out.push_str(&escape_html(lang));
                    out.push_str("\">");
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(code));
            out.push_str("</code></pre>");
        }
        Block::Table {
            alignments,
            header,
            rows,
        } => write_table(out, alignments, header, rows),
        Block::RawHtml(html) => out.push_str(html.trim_end_matches('\n')),
    }
}

fn write_list(out: &mut String, kind: ListKind, items: &[ListItem]) {
    match kind {
        ListKind::Ordered { start } if start != 1 => {
            out.push_str(&format!("<ol start=\"{start}\">\n"));
        }
        _ => {
            out.push('<');
            out.push_str(kind.tag());
            out.push_str(">\n");
        }
    }

    for item in items {
        write_item(out, item);
        out.push('\n');
    }

    out.push_str("</");
    out.push_str(kind.tag());
    out.push('>');
}

fn write_item(out: &mut String, item: &ListItem) {
    let Some(checked) = item.task else {
        out.push_str("<li>");
        write_item_body(out, &item.blocks);
        out.push_str("</li>");
        return;
    };

    out.push_str("<li class=\"task-list-item\">");
    match item.blocks.split_first() {
        // Loose items keep the checkbox inside their first paragraph
        Some((Block::Paragraph(content), rest)) => {
            out.push_str("\n<p>");
            write_checkbox(out, checked);
            out.push(' ');
            write_inlines(out, content);
            out.push_str("</p>");
            if !rest.is_empty() {
                out.push('\n');
                write_blocks(out, rest);
            }
            out.push('\n');
        }
        Some((Block::Plain(_), _)) => {
            write_checkbox(out, checked);
            out.push(' ');
            write_item_body(out, &item.blocks);
        }
        _ => {
            write_checkbox(out, checked);
            write_item_body(out, &item.blocks);
        }
    }
    out.push_str("</li>");
}

fn write_checkbox(out: &mut String, checked: bool) {
    out.push_str("<input type=\"checkbox\" disabled");
    if checked {
        out.push_str(" checked");
    }
    out.push('>');
}

fn write_item_body(out: &mut String, blocks: &[Block]) {
    // Block children sit on their own lines; tight inline content does not
    let starts_inline = matches!(blocks.first(), Some(Block::Plain(_)));
    let ends_inline = matches!(blocks.last(), Some(Block::Plain(_)));
    if !blocks.is_empty() && !starts_inline {
        out.push('\n');
    }
    write_blocks(out, blocks);
    if !blocks.is_empty() && !ends_inline {
        out.push('\n');
    }
}

fn write_table(out: &mut String, alignments: &[Alignment], header: &[TableCell], rows: &[Vec<TableCell>]) {
    out.push_str("<table>\n<thead>\n");
    write_row(out, "th", alignments, header);
    out.push_str("</thead>\n");
    if !rows.is_empty() {
        out.push_str("<tbody>\n");
        for row in rows {
            write_row(out, "td", alignments, row);
        }
        out.push_str("</tbody>\n");
    }
    out.push_str("</table>");
}

fn write_row(out: &mut String, tag: &str, alignments: &[Alignment], cells: &[TableCell]) {
    out.push_str("<tr>\n");
    for (i, cell) in cells.iter().enumerate() {
        out.push('<');
        out.push_str(tag);
        if let Some(align) = alignments.get(i).and_then(|a| a.as_attr()) {
            out.push_str(&format!(" align=\"{align}\""));
        }
        out.push('>');
        write_inlines(out, cell);
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
    out.push_str("</tr>\n");
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        write_inline(out, inline);
    }
}

fn write_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(text) => out.push_str(&escape_html(text)),
        Inline::Emphasis(children) => wrap(out, "em", children),
        Inline::Strong(children) => wrap(out, "strong", children),
        Inline::Strikethrough(children) => wrap(out, "del", children),
        Inline::Code(code) => {
            out.push_str("<code>");
            out.push_str(&escape_html(code));
            out.push_str("</code>");
        }
        Inline::Link {
            href,
            title,
            content,
        } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(href));
            out.push('"');
            write_title(out, title.as_deref());
            out.push('>');
            write_inlines(out, content);
            out.push_str("</a>");
        }
        Inline::Image { src, alt, title } => {
            out.push_str("<img src=\"");
            out.push_str(&escape_html(src));
            out.push_str("\" alt=\"");
            out.push_str(&escape_html(alt));
            out.push('"');
            write_title(out, title.as_deref());
            out.push('>');
        }
        Inline::Autolink { href, text } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(href));
            out.push_str("\">");
            out.push_str(&escape_html(text));
            out.push_str("</a>");
        }
        Inline::RawHtml(html) => out.push_str(html),
        Inline::SoftBreak => out.push('\n'),
        Inline::LineBreak => out.push_str("<br>\n"),
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_inlines(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title {
        out.push_str(" title=\"");
        out.push_str(&escape_html(title));
        out.push('"');
    }
}
