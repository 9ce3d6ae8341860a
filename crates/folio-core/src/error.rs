//! Error types for folio

use thiserror::Error;

/// Main error type for folio operations.
///
/// Content problems never show up here: ambiguous Markdown degrades to
/// literal text and unknown languages fall back to plain text. What is
/// left are input that is not UTF-8 and faults in the highlighting backend.
#[derive(Error, Debug)]
pub enum FolioError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input bytes were not valid UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A configured highlighting theme is not available
    #[error("Theme not found: {name}")]
    ThemeNotFound {
        /// The theme name that was requested
        name: String,
    },

    /// The highlighting backend failed while tokenizing
    #[error("Highlight error: {0}")]
    Highlight(String),
}

impl FolioError {
    /// Whether this error is a fault in the rendering infrastructure
    /// rather than a problem with the caller's input.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            FolioError::ThemeNotFound { .. } | FolioError::Highlight(_) | FolioError::Io(_)
        )
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
