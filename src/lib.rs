//! Finds emoji in free-form text.
//!
//! Three forms are recognized:
//! - literal unicode emoji (`😄`),
//! - colon-delimited shortcodes (`:smile:`),
//! - custom emoji tags (`<a:wave:1234567890123456>`).
//!
//! Everything goes through an [`EmojiParser`], which owns the lookup tables. Build one from a
//! [`TableSource`], or use the bundled sample tables via [`init_default`].

#![warn(clippy::perf, clippy::style, warnings)]

pub mod emoji;
pub mod error;
pub mod parser;
pub mod scan;
pub mod source;
pub mod tables;

mod prelude {
    pub use tracing::{debug, trace};

    pub use crate::emoji::{EmojiKind, ParsedEmoji, Position, Ranged};
    pub use crate::error::LoadError;
    pub use crate::parser::Hosts;
    pub use crate::tables::LookupTables;
}

use once_cell::sync::OnceCell;

pub use emoji::{EmojiKind, ParsedEmoji, Position, Ranged};
pub use error::LoadError;
pub use parser::{EmojiParser, Hosts};
pub use source::{Bundled, JsonDirectory, TableSource};
pub use tables::{LookupTables, RawTables};

static DEFAULT_PARSER: OnceCell<EmojiParser> = OnceCell::new();

/// Builds the default parser (bundled tables, default hosts) if it hasn't been built yet.
///
/// Nothing is loaded until this (or one of the free parsing functions) is called.
pub fn init_default() -> Result<&'static EmojiParser, LoadError> {
    DEFAULT_PARSER.get_or_try_init(EmojiParser::bundled)
}

/// Alias of [`init_default`].
pub fn default_parser() -> Result<&'static EmojiParser, LoadError> {
    init_default()
}

/// [`EmojiParser::parse`] on the default parser.
pub fn parse(content: &str) -> Result<Vec<ParsedEmoji>, LoadError> {
    Ok(init_default()?.parse(content))
}

/// [`EmojiParser::parse_unicode`] on the default parser.
pub fn parse_unicode(content: &str, exclusions: &[ParsedEmoji]) -> Result<Vec<ParsedEmoji>, LoadError> {
    Ok(init_default()?.parse_unicode(content, exclusions))
}

/// [`EmojiParser::parse_text`] on the default parser.
pub fn parse_text(content: &str, exclusions: &[ParsedEmoji]) -> Result<Vec<ParsedEmoji>, LoadError> {
    Ok(init_default()?.parse_text(content, exclusions))
}

/// [`EmojiParser::parse_custom`] on the default parser.
pub fn parse_custom(content: &str) -> Result<Vec<ParsedEmoji>, LoadError> {
    Ok(init_default()?.parse_custom(content))
}
