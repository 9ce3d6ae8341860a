//! The parsed Markdown document tree.
//!
//! A [`Document`] owns its blocks, every block owns its children, and
//! inline content hangs off the block that contains it. Ownership through
//! `Vec` makes the tree a strict hierarchy: no node can be its own ancestor.

use crate::enums::{Alignment, ListKind};

/// Inline content of a single table cell.
pub type TableCell = Vec<Inline>;

/// A parsed Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from its top-level blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Check whether the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Count the code blocks anywhere in the tree.
    pub fn code_block_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|block| match block {
                    Block::CodeBlock { .. } => 1,
                    Block::BlockQuote(children) => count(children),
                    Block::List { items, .. } => {
                        items.iter().map(|item| count(&item.blocks)).sum()
                    }
                    _ => 0,
                })
                .sum()
        }
        count(&self.blocks)
    }
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Paragraph of inline content
    Paragraph(Vec<Inline>),
    /// Inline content of a tight list item, rendered without `<p>`
    Plain(Vec<Inline>),
    /// ATX or setext heading
    Heading {
        /// Heading level, 1 through 6
        level: u8,
        /// Heading text
        content: Vec<Inline>,
    },
    /// Ordered or unordered list
    List {
        /// Bullet or ordered (with start number)
        kind: ListKind,
        /// Whether the list is tight (no blank lines between items)
        tight: bool,
        /// The list items
        items: Vec<ListItem>,
    },
    /// Block quote
    BlockQuote(Vec<Block>),
    /// Horizontal rule
    ThematicBreak,
    /// Fenced or indented code block
    CodeBlock {
        /// Language identifier from the opening fence, if any
        language: Option<String>,
        /// Literal code text, newline-terminated per line
        code: String,
    },
    /// GFM table
    Table {
        /// One alignment per column
        alignments: Vec<Alignment>,
        /// Header row cells
        header: Vec<TableCell>,
        /// Body rows
        rows: Vec<Vec<TableCell>>,
    },
    /// Raw HTML block, emitted verbatim
    RawHtml(String),
}

/// A single list item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// GFM task marker: `Some(true)` for `[x]`, `Some(false)` for `[ ]`
    pub task: Option<bool>,
    /// Item content
    pub blocks: Vec<Block>,
}

/// Inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text run
    Text(String),
    /// `*emphasis*`
    Emphasis(Vec<Inline>),
    /// `**strong**`
    Strong(Vec<Inline>),
    /// `~~strikethrough~~`
    Strikethrough(Vec<Inline>),
    /// `` `code` ``
    Code(String),
    /// Inline or reference link
    Link {
        /// Destination URL
        href: String,
        /// Optional title
        title: Option<String>,
        /// Link text
        content: Vec<Inline>,
    },
    /// Image
    Image {
        /// Image source URL
        src: String,
        /// Alternative text, flattened to plain text
        alt: String,
        /// Optional title
        title: Option<String>,
    },
    /// `<https://...>` or bare URL autolink
    Autolink {
        /// Destination URL (`mailto:` prefixed for e-mail addresses)
        href: String,
        /// Displayed text
        text: String,
    },
    /// Raw inline HTML, emitted verbatim
    RawHtml(String),
    /// Soft line break
    SoftBreak,
    /// Hard line break
    LineBreak,
}

impl Inline {
    /// Flatten inline content to its plain text.
    ///
    /// Used for image alt text, which cannot carry markup.
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            inline.push_plain_text(&mut out);
        }
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link {
                content: children, ..
            } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::Autolink { text, .. } => out.push_str(text),
            Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::RawHtml(_) => {}
        }
    }
}
