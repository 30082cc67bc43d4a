use crate::emoji::is_excluded;
use crate::prelude::*;

use super::asset_link;

/// Finds literal unicode emoji, preferring the longest known sequence at each position.
///
/// No match starts inside any of `exclusions`.
pub fn scan(content: &str, exclusions: &[ParsedEmoji], tables: &LookupTables, hosts: &Hosts) -> Vec<ParsedEmoji> {
    let candidates = tables.candidates();
    let mut results = Vec::new();
    let mut i = 0;

    while i < content.len() {
        let rest = &content[i..];

        let found = match is_excluded(i, exclusions) {
            true => None,
            false => candidates.longest_prefix(rest),
        };

        let Some(sequence) = found else {
            // Step a whole scalar value so `i` stays on a char boundary.
            i += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        let from = i;
        let to = i + sequence.len();

        results.push(ParsedEmoji {
            id: None,
            name: tables.name_for(sequence).unwrap_or_default().to_owned(),
            kind: EmojiKind::Unicode,
            unicode: sequence.to_owned(),
            position: Position { from, to },
            link: asset_link(sequence, None, tables, hosts),
            animated: false,
        });

        i = to;
    }

    trace!("Unicode scan found {} emoji.", results.len());
    results
}
