//! Folio Parser
//!
//! Turns Markdown source into a [`Document`] tree.
//!
//! # Overview
//!
//! The event stream of `pulldown-cmark` (CommonMark plus the GFM tables,
//! strikethrough and task list extensions) is folded into the owned tree
//! from `folio-core` with an explicit frame stack. A second pass links
//! bare URLs. Parsing never fails: anything the grammar cannot make sense
//! of stays literal text.
//!
//! # Example
//!
//! ```
//! use folio_core::{Block, Inline};
//! use folio_parser::parse;
//!
//! let doc = parse("# Hello World");
//! assert_eq!(
//!     doc.blocks[0],
//!     Block::Heading { level: 1, content: vec![Inline::Text("Hello World".into())] }
//! );
//! ```

pub mod autolink;
pub mod entities;

pub use autolink::split_urls;
pub use entities::decode_html_entities;

use folio_core::{Alignment, Block, Document, Inline, ListItem, ListKind, TableCell};
use log::trace;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, LinkType, Options, Tag};

// =============================================================================
// Options
// =============================================================================

/// Which GFM extensions the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Pipe tables
    pub tables: bool,
    /// `~~strikethrough~~`
    pub strikethrough: bool,
    /// `- [ ]` task list items
    pub tasklists: bool,
    /// Bare `https://` / `www.` autolinks
    pub autolinks: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            autolinks: true,
        }
    }
}

impl ParserOptions {
    /// Options with every extension turned off (plain CommonMark).
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            tasklists: false,
            autolinks: false,
        }
    }

    /// The matching `pulldown-cmark` option set.
    pub fn cmark_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options |= Options::ENABLE_TABLES;
        }
        if self.strikethrough {
            options |= Options::ENABLE_STRIKETHROUGH;
        }
        if self.tasklists {
            options |= Options::ENABLE_TASKLISTS;
        }
        options
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Markdown parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Create a parser with every GFM extension enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse Markdown source into a document tree.
    pub fn parse(&self, source: &str) -> Document {
        let events = pulldown_cmark::Parser::new_ext(source, self.options.cmark_options());

        let mut builder = TreeBuilder::default();
        for event in events {
            builder.event(event);
        }
        let mut doc = builder.finish();

        if self.options.autolinks {
            autolink::link_document(&mut doc);
        }

        trace!(
            "Parsed {} bytes into {} top-level blocks",
            source.len(),
            doc.blocks.len()
        );
        doc
    }
}

/// Parse Markdown source with the default (full GFM) options.
pub fn parse(source: &str) -> Document {
    Parser::new().parse(source)
}

// =============================================================================
// Tree building
// =============================================================================

/// An open container while folding events into the tree.
#[derive(Debug)]
enum Frame {
    Paragraph(Vec<Inline>),
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    BlockQuote(Vec<Block>),
    List {
        kind: ListKind,
        items: Vec<ListItem>,
    },
    Item {
        task: Option<bool>,
        blocks: Vec<Block>,
        /// Inline content of a tight item not yet wrapped in `Block::Plain`
        pending: Vec<Inline>,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    HtmlBlock(String),
    Table {
        alignments: Vec<Alignment>,
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    },
    TableHead(Vec<TableCell>),
    TableRow(Vec<TableCell>),
    TableCell(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        href: String,
        title: Option<String>,
        autolink: bool,
        content: Vec<Inline>,
    },
    Image {
        src: String,
        title: Option<String>,
        content: Vec<Inline>,
    },
    /// A construct we do not model; its content is dropped
    Ignored,
}

impl Frame {
    /// The inline list this frame collects, if it holds inline content.
    fn inlines_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Frame::Paragraph(inlines)
            | Frame::Heading {
                content: inlines, ..
            }
            | Frame::TableCell(inlines)
            | Frame::Emphasis(inlines)
            | Frame::Strong(inlines)
            | Frame::Strikethrough(inlines)
            | Frame::Link {
                content: inlines, ..
            }
            | Frame::Image {
                content: inlines, ..
            }
            | Frame::Item {
                pending: inlines, ..
            } => Some(inlines),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct TreeBuilder {
    blocks: Vec<Block>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.into_string())),
            Event::Html(html) => self.html_block_line(&html),
            Event::InlineHtml(html) => self.push_inline(Inline::RawHtml(html.into_string())),
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::LineBreak),
            Event::Rule => self.push_block(Block::ThematicBreak),
            Event::TaskListMarker(checked) => self.task_marker(checked),
            // Footnotes and math are never enabled.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Frame::Heading {
                level: heading_level(level),
                content: Vec::new(),
            },
            Tag::BlockQuote(_) => Frame::BlockQuote(Vec::new()),
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                language: match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Frame::HtmlBlock(String::new()),
            Tag::List(start) => Frame::List {
                kind: match start {
                    Some(start) => ListKind::Ordered { start },
                    None => ListKind::Bullet,
                },
                items: Vec::new(),
            },
            Tag::Item => Frame::Item {
                task: None,
                blocks: Vec::new(),
                pending: Vec::new(),
            },
            Tag::Table(alignments) => Frame::Table {
                alignments: alignments.into_iter().map(alignment).collect(),
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => Frame::TableHead(Vec::new()),
            Tag::TableRow => Frame::TableRow(Vec::new()),
            Tag::TableCell => Frame::TableCell(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Strikethrough => Frame::Strikethrough(Vec::new()),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                let (href, autolink) = match link_type {
                    LinkType::Autolink => (dest_url.into_string(), true),
                    LinkType::Email => (format!("mailto:{}", dest_url), true),
                    _ => (dest_url.into_string(), false),
                };
                Frame::Link {
                    href,
                    title: non_empty(title.into_string()),
                    autolink,
                    content: Vec::new(),
                }
            }
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                src: dest_url.into_string(),
                title: non_empty(title.into_string()),
                content: Vec::new(),
            },
            _ => Frame::Ignored,
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Paragraph(inlines) => self.push_block(Block::Paragraph(inlines)),
            Frame::Heading { level, content } => self.push_block(Block::Heading { level, content }),
            Frame::BlockQuote(blocks) => self.push_block(Block::BlockQuote(blocks)),
            Frame::CodeBlock { language, code } => {
                self.push_block(Block::CodeBlock { language, code })
            }
            Frame::HtmlBlock(html) => self.push_block(Block::RawHtml(html)),
            Frame::List { kind, items } => {
                // Loose list items always wrap their text in paragraphs.
                let tight = !items
                    .iter()
                    .any(|item| item.blocks.iter().any(|b| matches!(b, Block::Paragraph(_))));
                self.push_block(Block::List { kind, tight, items });
            }
            Frame::Item {
                task,
                mut blocks,
                pending,
            } => {
                if !pending.is_empty() {
                    blocks.push(Block::Plain(pending));
                }
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(ListItem { task, blocks });
                }
            }
            Frame::Table {
                alignments,
                header,
                rows,
            } => self.push_block(Block::Table {
                alignments,
                header,
                rows,
            }),
            Frame::TableHead(cells) => {
                if let Some(Frame::Table { header, .. }) = self.stack.last_mut() {
                    *header = cells;
                }
            }
            Frame::TableRow(cells) => {
                if let Some(Frame::Table { rows, .. }) = self.stack.last_mut() {
                    rows.push(cells);
                }
            }
            Frame::TableCell(inlines) => match self.stack.last_mut() {
                Some(Frame::TableHead(cells)) | Some(Frame::TableRow(cells)) => cells.push(inlines),
                _ => {}
            },
            Frame::Emphasis(children) => self.push_inline(Inline::Emphasis(children)),
            Frame::Strong(children) => self.push_inline(Inline::Strong(children)),
            Frame::Strikethrough(children) => self.push_inline(Inline::Strikethrough(children)),
            Frame::Link {
                href,
                title,
                autolink,
                content,
            } => {
                let inline = if autolink {
                    Inline::Autolink {
                        href,
                        text: Inline::plain_text(&content),
                    }
                } else {
                    Inline::Link {
                        href,
                        title,
                        content,
                    }
                };
                self.push_inline(inline);
            }
            Frame::Image {
                src,
                title,
                content,
            } => self.push_inline(Inline::Image {
                src,
                alt: Inline::plain_text(&content),
                title,
            }),
            Frame::Ignored => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Frame::CodeBlock { code, .. }) = self.stack.last_mut() {
            code.push_str(text);
            return;
        }
        self.push_inline(Inline::Text(text.to_string()));
    }

    fn html_block_line(&mut self, html: &str) {
        match self.stack.last_mut() {
            Some(Frame::HtmlBlock(buffer)) => buffer.push_str(html),
            _ => self.push_block(Block::RawHtml(html.to_string())),
        }
    }

    fn task_marker(&mut self, checked: bool) {
        let item = self.stack.iter_mut().rev().find_map(|frame| match frame {
            Frame::Item { task, .. } => Some(task),
            _ => None,
        });
        if let Some(task) = item {
            *task = Some(checked);
        }
    }

    /// Append inline content to the innermost inline container.
    ///
    /// Adjacent text runs are merged so later passes see whole runs.
    fn push_inline(&mut self, inline: Inline) {
        let target = match self.stack.last_mut() {
            Some(Frame::Ignored) => return,
            Some(frame) => frame.inlines_mut(),
            None => None,
        };

        let Some(inlines) = target else {
            // Inline content outside any inline container: keep it as a bare block.
            self.push_block(Block::Plain(vec![inline]));
            return;
        };

        if let (Some(Inline::Text(last)), Inline::Text(text)) = (inlines.last_mut(), &inline) {
            last.push_str(text);
            return;
        }
        inlines.push(inline);
    }

    /// Append a block to the innermost block container.
    fn push_block(&mut self, block: Block) {
        match self.stack.last_mut() {
            None => self.blocks.push(block),
            Some(Frame::BlockQuote(blocks)) => blocks.push(block),
            Some(Frame::Item {
                blocks, pending, ..
            }) => {
                if !pending.is_empty() {
                    blocks.push(Block::Plain(std::mem::take(pending)));
                }
                blocks.push(block);
            }
            Some(_) => {}
        }
    }

    fn finish(mut self) -> Document {
        // pulldown-cmark always balances its events; close anything left open regardless.
        while !self.stack.is_empty() {
            self.end();
        }
        Document::new(self.blocks)
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alignment(align: pulldown_cmark::Alignment) -> Alignment {
    match align {
        pulldown_cmark::Alignment::None => Alignment::None,
        pulldown_cmark::Alignment::Left => Alignment::Left,
        pulldown_cmark::Alignment::Center => Alignment::Center,
        pulldown_cmark::Alignment::Right => Alignment::Right,
    }
}

/// The language of a fence is the first word of its info string.
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_string)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
