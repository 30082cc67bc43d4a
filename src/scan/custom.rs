use once_cell::sync::Lazy;
use regex::Regex;

use crate::prelude::*;

/// `<:name:id>` or `<a:name:id>`. IDs shorter than 16 digits predate the format and never occur.
static CUSTOM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<(a?):(\w+):(\d{16,})>"#).unwrap());

/// Finds custom emoji tags. No table lookup happens here; the ID is taken as written.
pub fn scan(content: &str, hosts: &Hosts) -> Vec<ParsedEmoji> {
    let results: Vec<_> = CUSTOM_REGEX
        .captures_iter(content)
        .map(|captures| {
            // Unwrap justification: every group in the pattern is mandatory (the flag may be empty).
            let whole = captures.get(0).unwrap();
            let animated = captures.get(1).unwrap().as_str() == "a";
            let name = captures.get(2).unwrap().as_str();
            let id = captures.get(3).unwrap().as_str();

            ParsedEmoji {
                id: Some(id.to_owned()),
                name: name.to_owned(),
                kind: EmojiKind::Custom,
                unicode: whole.as_str().to_owned(),
                position: whole.range().into(),
                link: Some(hosts.custom_link(id, animated)),
                animated,
            }
        })
        .collect();

    trace!("Custom tag scan found {} emoji.", results.len());
    results
}
