//! The result type shared by every scanner.

use std::fmt::Display;
use std::ops::Range;

use serde::Serialize;

/// Anything that occupies a byte range of some source text.
pub trait Ranged {
    fn range(&self) -> Range<usize>;

    /// Whether the given byte offset falls inside this item's range.
    fn covers(&self, offset: usize) -> bool {
        self.range().contains(&offset)
    }
}

/// Returns true if `offset` falls inside any of the given ranges.
///
/// This is a linear scan; exclusion lists are expected to be short.
pub fn is_excluded<T: Ranged>(offset: usize, exclusions: &[T]) -> bool {
    exclusions.iter().any(|item| item.covers(offset))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Which form an emoji was written in.
pub enum EmojiKind {
    /// A literal unicode sequence, such as `😄`.
    Unicode,
    /// A shortcode, such as `:smile:`.
    Text,
    /// A custom emoji tag, such as `<a:wave:1234567890123456>`.
    Custom,
}

impl Display for EmojiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Unicode => "unicode",
            Self::Text => "text",
            Self::Custom => "custom",
        };

        write!(f, "{kind}")
    }
}

/// Half-open byte offsets of a match within the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub from: usize,
    pub to: usize,
}

impl From<Range<usize>> for Position {
    fn from(range: Range<usize>) -> Self {
        Self {
            from: range.start,
            to: range.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single emoji found in some text.
pub struct ParsedEmoji {
    /// The custom emoji ID. Only present for [`EmojiKind::Custom`].
    pub id: Option<String>,
    /// The emoji's name, e.g. `smile` or `wave`.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EmojiKind,
    /// For unicode and custom emoji, the matched text itself.
    ///
    /// For shortcodes this is the *resolved* emoji (`😄` for `:smile:`), not the source text.
    pub unicode: String,
    pub position: Position,
    /// Image URL for the emoji, if one could be built.
    pub link: Option<String>,
    /// Whether a custom emoji is animated. Always false for other kinds.
    pub animated: bool,
}

impl Ranged for ParsedEmoji {
    fn range(&self) -> Range<usize> {
        self.position.from..self.position.to
    }
}
