use once_cell::sync::Lazy;
use regex::Regex;

use crate::emoji::is_excluded;
use crate::prelude::*;

use super::asset_link;

static SHORTCODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#":([A-Za-z0-9_]+):"#).unwrap());

/// Finds `:name:` shortcodes that resolve to a known emoji.
///
/// Unknown names and matches starting inside `exclusions` are dropped.
pub fn scan(content: &str, exclusions: &[ParsedEmoji], tables: &LookupTables, hosts: &Hosts) -> Vec<ParsedEmoji> {
    let results: Vec<_> = SHORTCODE_REGEX
        .captures_iter(content)
        .filter_map(|captures| {
            // Unwrap justification: group 0 always exists and the pattern has exactly one group.
            let whole = captures.get(0).unwrap();
            let name = captures.get(1).unwrap().as_str();

            if is_excluded(whole.start(), exclusions) {
                return None;
            }

            let unicode = tables.unicode_for(name)?;

            Some(ParsedEmoji {
                id: None,
                name: name.to_owned(),
                kind: EmojiKind::Text,
                unicode: unicode.to_owned(),
                position: whole.range().into(),
                link: asset_link(unicode, Some("svg"), tables, hosts),
                animated: false,
            })
        })
        .collect();

    trace!("Shortcode scan found {} emoji.", results.len());
    results
}
