//! The three matchers. Each one is a plain function over the input text; none of them share state.

pub mod custom;
pub mod shortcode;
pub mod unicode;

use crate::tables::codepoints;
use crate::prelude::*;

/// Builds the asset URL for a unicode emoji, if its hash is known.
fn asset_link(emoji: &str, extension: Option<&str>, tables: &LookupTables, hosts: &Hosts) -> Option<String> {
    let hash = tables.asset_hash(&codepoints(emoji))?;

    let link = match extension {
        Some(ext) => format!("https://{}/assets/{hash}.{ext}", hosts.assets),
        None => format!("https://{}/assets/{hash}", hosts.assets),
    };

    Some(link)
}
