//! Folio Core
//!
//! This crate provides the shared data model and error definitions
//! for the folio Markdown rendering pipeline.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Document`], [`Block`], [`Inline`] - The parsed Markdown tree
//! - [`ListKind`], [`Alignment`] - Structural enums used by the tree
//! - [`ThemeLayout`] - How dual-theme code blocks are packaged
//! - [`CodeBlockSpan`], [`HighlightedBlock`] - Spans into rendered HTML and their replacements
//! - [`FolioError`] - Error types

pub mod document;
pub mod enums;
pub mod error;
pub mod escape;
pub mod types;

pub use document::{Block, Document, Inline, ListItem, TableCell};
pub use enums::{Alignment, ListKind, ThemeLayout, DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};
pub use error::{FolioError, Result};
pub use escape::escape_html;
pub use types::{CodeBlockSpan, HighlightedBlock};
