use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::scan;
use crate::source::{Bundled, TableSource};
use crate::prelude::*;

/// Hosts used to build emoji image URLs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Hosts {
    /// Serves unicode emoji assets: `https://<assets>/assets/<hash>`.
    pub assets: String,
    /// Serves custom emoji images: `https://<cdn>/emojis/<id>.<png|gif>`.
    pub cdn: String,
}

impl Default for Hosts {
    fn default() -> Self {
        Hosts {
            assets: "discord.com".to_owned(),
            cdn: "cdn.discordapp.com".to_owned(),
        }
    }
}

impl Hosts {
    pub fn custom_link(&self, id: &str, animated: bool) -> String {
        let ext = match animated {
            true => "gif",
            false => "png",
        };

        format!("https://{}/emojis/{id}.{ext}", self.cdn)
    }
}

/// Parses unicode, shortcode and custom emoji out of text.
///
/// A parser is immutable once built and can be shared freely between threads.
#[derive(Debug)]
pub struct EmojiParser {
    tables: LookupTables,
    hosts: Hosts,
}

impl EmojiParser {
    pub fn new(tables: LookupTables, hosts: Hosts) -> Self {
        Self { tables, hosts }
    }

    /// Loads tables from `source` and builds a parser around them.
    pub fn from_source(source: &impl TableSource, hosts: Hosts) -> Result<Self, LoadError> {
        let raw = source.load()?;
        Ok(Self::new(LookupTables::build(raw), hosts))
    }

    /// A parser over the bundled sample tables, with the default hosts.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_source(&Bundled, Hosts::default())
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    pub fn hosts(&self) -> &Hosts {
        &self.hosts
    }

    /// Finds every emoji in `content`, ordered by start position.
    ///
    /// Custom tags are found first; unicode emoji and shortcodes starting inside one are ignored.
    pub fn parse(&self, content: &str) -> Vec<ParsedEmoji> {
        let custom = self.parse_custom(content);
        let unicode = self.parse_unicode(content, &custom);
        let text = self.parse_text(content, &custom);

        let mut all = unicode;
        all.extend(text);
        all.extend(custom);

        // Stable, so equal starts keep the order above.
        all.sort_by_key(|emoji| emoji.position.from);

        debug!("Parsed {} emoji from {} bytes of input.", all.len(), content.len());
        all
    }

    /// Finds literal unicode emoji. Matches may not start inside any of `exclusions`.
    pub fn parse_unicode(&self, content: &str, exclusions: &[ParsedEmoji]) -> Vec<ParsedEmoji> {
        scan::unicode::scan(content, exclusions, &self.tables, &self.hosts)
    }

    /// Finds `:shortcode:` emoji. Matches may not start inside any of `exclusions`.
    pub fn parse_text(&self, content: &str, exclusions: &[ParsedEmoji]) -> Vec<ParsedEmoji> {
        scan::shortcode::scan(content, exclusions, &self.tables, &self.hosts)
    }

    /// Finds custom emoji tags such as `<a:wave:1234567890123456>`.
    pub fn parse_custom(&self, content: &str) -> Vec<ParsedEmoji> {
        scan::custom::scan(content, &self.hosts)
    }

    /// Replaces every emoji [`parse`](Self::parse) finds with the output of `replacer`.
    ///
    /// Returns the input untouched (and borrowed) if there is nothing to replace.
    pub fn expand<'a>(&self, content: &'a str, replacer: impl FnMut(&ParsedEmoji) -> String) -> Cow<'a, str> {
        ranged_expand(content, self.parse(content), replacer)
    }

    /// Turns shortcodes into the emoji they stand for; everything else is left as written.
    pub fn emojify<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let text = self.parse_text(content, &self.parse_custom(content));

        ranged_expand(content, text, |emoji| emoji.unicode.clone())
    }
}

/// Splices replacements for `targets` into `source`. Targets must be sorted by start.
///
/// A target starting inside one already replaced is skipped; the unicode and shortcode scanners
/// run independently, so their matches can overlap.
fn ranged_expand<'a, T: Ranged>(source: &'a str, targets: Vec<T>, mut replacer: impl FnMut(&T) -> String) -> Cow<'a, str> {
    if targets.is_empty() {
        return Cow::Borrowed(source);
    }

    let mut buffer = String::with_capacity(source.len());
    let mut last_match = 0;
    for target in targets {
        let range = target.range();
        if range.start < last_match {
            trace!("Skipping overlapping match at {}..{}.", range.start, range.end);
            continue;
        }

        buffer.push_str(&source[last_match..range.start]);
        buffer.push_str(&replacer(&target));

        last_match = range.end;
    }
    buffer.push_str(&source[last_match..]);

    Cow::Owned(buffer)
}

#[cfg(test)]
mod parse {
    use once_cell::sync::Lazy;

    use super::*;

    static PARSER: Lazy<EmojiParser> = Lazy::new(|| EmojiParser::bundled().unwrap());

    const SAMPLES: &[&str] = &[
        "",
        "no emoji here",
        "A :smile: B 😄 C <a:wave:1234567890123456>",
        "<:smile:6789012345678901>:smile:😄",
        "👋🏽👋:wave::wave_tone3:<a:wave:1234567890123456>",
        "🇺🇸 #️⃣ 👨‍💻 :100: :fire::tada:",
        "<:a:1234567890123456><:b:1234567890123456>:eyes:",
        "broken <:x:123> and :nope: and < a:x:1234567890123456>",
    ];

    #[test]
    fn mixed() {
        let results = PARSER.parse("A :smile: B 😄 C <a:wave:1234567890123456>");

        let kinds: Vec<_> = results.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [EmojiKind::Text, EmojiKind::Unicode, EmojiKind::Custom]);

        let names: Vec<_> = results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["smile", "smile", "wave"]);
    }

    #[test]
    fn custom_tags_are_never_split() {
        let content = "<:smile:6789012345678901>";
        let results = PARSER.parse(content);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, EmojiKind::Custom);

        // Without the custom pass, `:smile:` inside the tag would be found.
        assert_eq!(PARSER.parse_text(content, &[]).len(), 1);
    }

    #[test]
    fn ordered_by_start() {
        for sample in SAMPLES {
            let results = PARSER.parse(sample);

            assert!(
                results.windows(2).all(|w| w[0].position.from <= w[1].position.from),
                "out of order for {sample:?}"
            );
        }
    }

    #[test]
    fn positions_point_into_input() {
        for sample in SAMPLES {
            for emoji in PARSER.parse(sample) {
                let Position { from, to } = emoji.position;
                assert!(to > from, "empty match in {sample:?}");

                let source = &sample[from..to];
                match emoji.kind {
                    EmojiKind::Unicode | EmojiKind::Custom => assert_eq!(source, emoji.unicode),
                    EmojiKind::Text => {
                        assert_eq!(source, format!(":{}:", emoji.name));
                        assert_eq!(PARSER.tables().unicode_for(&emoji.name), Some(emoji.unicode.as_str()));
                    }
                }
            }
        }
    }

    #[test]
    fn only_custom_carries_ids() {
        for sample in SAMPLES {
            for emoji in PARSER.parse(sample) {
                let custom = emoji.kind == EmojiKind::Custom;

                assert_eq!(emoji.id.is_some(), custom);
                if !custom {
                    assert!(!emoji.animated);
                }
            }
        }
    }

    #[test]
    fn svg_asymmetry() {
        let results = PARSER.parse(":smile: 😄");

        assert!(results[0].link.as_ref().unwrap().ends_with(".svg"));
        assert!(!results[1].link.as_ref().unwrap().ends_with(".svg"));
    }

    #[test]
    fn custom_hosts() {
        let hosts = Hosts {
            assets: "assets.example".to_owned(),
            cdn: "cdn.example".to_owned(),
        };
        let parser = EmojiParser::from_source(&Bundled, hosts.clone()).unwrap();
        assert_eq!(parser.hosts(), &hosts);

        let results = parser.parse("😄 <:x:1234567890123456>");

        assert!(results[0].link.as_ref().unwrap().starts_with("https://assets.example/assets/"));
        assert_eq!(results[1].link.as_deref(), Some("https://cdn.example/emojis/1234567890123456.png"));
    }

    #[test]
    fn nothing_to_parse() {
        assert!(PARSER.parse("").is_empty());
        assert!(PARSER.parse("plain ascii: with: colons").is_empty());
    }
}
