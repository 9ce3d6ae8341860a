//! Structural enums shared by the document tree.

use serde::{Deserialize, Serialize};

/// The kind of list a [`Block::List`](crate::Block::List) represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Unordered list with bullets (*, -, +)
    Bullet,
    /// Ordered list; `start` is the number of the first item
    Ordered {
        /// First item number
        start: u64,
    },
}

impl ListKind {
    /// Check if this is an ordered list.
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListKind::Ordered { .. })
    }

    /// HTML tag name for this list kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Ordered { .. } => "ol",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Ordered { start } => write!(f, "ordered({})", start),
        }
    }
}

/// Column alignment declared by a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// No colon in the delimiter row
    #[default]
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl Alignment {
    /// Value for the HTML `align` attribute, if any.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alignment::None => write!(f, "none"),
            Alignment::Left => write!(f, "left"),
            Alignment::Center => write!(f, "center"),
            Alignment::Right => write!(f, "right"),
        }
    }
}

/// Default light theme (bundled with syntect).
pub const DEFAULT_LIGHT_THEME: &str = "InspiredGitHub";

/// Default dark theme (bundled with syntect).
pub const DEFAULT_DARK_THEME: &str = "base16-ocean.dark";

/// How the light and dark renderings of a code block are packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayout {
    /// One markup tree; each token carries both colors as CSS custom properties
    #[default]
    Variables,
    /// Two complete `<pre>` blocks, one per theme
    Stacked,
}

impl std::fmt::Display for ThemeLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeLayout::Variables => write!(f, "variables"),
            ThemeLayout::Stacked => write!(f, "stacked"),
        }
    }
}

impl std::str::FromStr for ThemeLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "variables" => Ok(ThemeLayout::Variables),
            "stacked" => Ok(ThemeLayout::Stacked),
            other => Err(format!("unknown layout '{}' (expected variables or stacked)", other)),
        }
    }
}
