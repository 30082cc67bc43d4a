use console::style;
use emoji_parser::{EmojiParser, ParsedEmoji};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::prelude::*;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Emoji")]
    unicode: String,
    #[tabled(rename = "Link")]
    link: String,
}

impl From<&ParsedEmoji> for Row {
    fn from(emoji: &ParsedEmoji) -> Self {
        let kind = match emoji.animated {
            true => format!("{} (animated)", emoji.kind),
            false => emoji.kind.to_string(),
        };

        Row {
            position: format!("{}..{}", emoji.position.from, emoji.position.to),
            kind,
            name: emoji.name.clone(),
            unicode: emoji.unicode.clone(),
            link: emoji.link.clone().unwrap_or_else(|| "-".to_owned()),
        }
    }
}

pub fn print_emoji(emoji: &[ParsedEmoji], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(emoji).wrap_err("Could not serialize results.")?;
        println!("{out}");
        return Ok(());
    }

    if emoji.is_empty() {
        println!("{}", style("No emoji found.").dim());
        return Ok(());
    }

    let table = Table::new(emoji.iter().map(Row::from))
        .with(Style::rounded())
        .to_string();

    println!("{table}");
    Ok(())
}

/// Resolves `query` in whichever direction makes sense: names to emoji, emoji to names.
pub fn print_lookup(parser: &EmojiParser, query: &str) -> Result<()> {
    let tables = parser.tables();
    let trimmed = query.trim().trim_start_matches(':').trim_end_matches(':');

    let resolved = match trimmed.is_ascii() {
        true => tables.unicode_for(trimmed),
        false => tables.name_for(trimmed),
    };

    let Some(resolved) = resolved else {
        return Err(eyre!("No emoji matches {query:?}."))
            .suggestion("Shortcode names are case-sensitive, e.g. `smile` rather than `Smile`.");
    };

    println!("{} {}", style(trimmed).bold(), style(resolved).green().bright());
    Ok(())
}
