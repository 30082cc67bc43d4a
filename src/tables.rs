//! Lookup tables built from the raw emoji data.
//!
//! The raw name table is dual-purpose: some entries map a name to its emoji, others map an emoji
//! to its display name. Which side holds the emoji decides where an entry ends up.

use ahash::AHashMap;
use itertools::Itertools;

use crate::prelude::*;

/// The two raw mappings, as published.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    /// Name → emoji and emoji → name entries, mixed together.
    pub unicode_emojis: AHashMap<String, String>,
    /// Codepoint string (`1f44b-1f3fd`) → asset hash.
    pub unicode_emojis_svg: AHashMap<String, String>,
}

/// Emoji sequences that can start a match, grouped by their first scalar value.
///
/// Each group is ordered longest-first, so the first hit is always the longest one.
#[derive(Debug, Default)]
pub struct Candidates(AHashMap<char, Vec<String>>);

impl Candidates {
    fn build<'a>(keys: impl Iterator<Item = &'a String>) -> Self {
        let mut buckets: AHashMap<char, Vec<String>> = AHashMap::new();

        for key in keys {
            let Some(lead) = key.chars().next() else {
                continue;
            };

            buckets.entry(lead).or_default().push(key.clone());
        }

        // Equal lengths are sorted lexicographically so results don't depend on hash order.
        for bucket in buckets.values_mut() {
            bucket.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }

        Self(buckets)
    }

    /// Returns the longest known sequence that `haystack` starts with.
    pub fn longest_prefix<'c>(&'c self, haystack: &str) -> Option<&'c str> {
        let lead = haystack.chars().next()?;

        self.0
            .get(&lead)?
            .iter()
            .find(|key| haystack.starts_with(key.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Default)]
/// Read-only lookup tables shared by all scanners.
pub struct LookupTables {
    name_to_unicode: AHashMap<String, String>,
    unicode_to_name: AHashMap<String, String>,
    asset_hashes: AHashMap<String, String>,
    candidates: Candidates,
}

impl LookupTables {
    pub fn build(raw: RawTables) -> Self {
        let mut name_to_unicode = AHashMap::new();
        let mut unicode_to_name = AHashMap::new();

        for (key, value) in raw.unicode_emojis {
            if !key.is_ascii() {
                unicode_to_name.insert(key.clone(), value.clone());
            }

            if !value.is_ascii() {
                name_to_unicode.insert(key, value);
            }
        }

        let asset_hashes = raw.unicode_emojis_svg;
        let candidates = Candidates::build(unicode_to_name.keys());

        debug!(
            "Built emoji tables: {} names, {} sequences, {} asset hashes.",
            name_to_unicode.len(),
            unicode_to_name.len(),
            asset_hashes.len()
        );

        Self {
            name_to_unicode,
            unicode_to_name,
            asset_hashes,
            candidates,
        }
    }

    /// The emoji a shortcode name stands for, e.g. `smile` → `😄`.
    pub fn unicode_for(&self, name: &str) -> Option<&str> {
        self.name_to_unicode.get(name).map(String::as_str)
    }

    /// The display name of an emoji sequence, e.g. `😄` → `smile`.
    pub fn name_for(&self, unicode: &str) -> Option<&str> {
        self.unicode_to_name.get(unicode).map(String::as_str)
    }

    /// The asset hash for a codepoint string, as produced by [`codepoints`].
    pub fn asset_hash(&self, codepoints: &str) -> Option<&str> {
        self.asset_hashes.get(codepoints).map(String::as_str)
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    pub fn name_count(&self) -> usize {
        self.name_to_unicode.len()
    }

    pub fn sequence_count(&self) -> usize {
        self.unicode_to_name.len()
    }
}

impl From<RawTables> for LookupTables {
    fn from(raw: RawTables) -> Self {
        Self::build(raw)
    }
}

/// Lowercase hex of each scalar value, joined with `-`: `👋🏽` → `1f44b-1f3fd`.
pub fn codepoints(emoji: &str) -> String {
    emoji.chars().map(|c| format!("{:x}", c as u32)).join("-")
}
