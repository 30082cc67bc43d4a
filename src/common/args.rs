use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
    /// Path to a configuration file. Defaults to `emoji.toml` in the current directory, if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding `UnicodeEmojis.json` and `UnicodeEmojisSVG.json`. Overrides the configuration file.
    #[arg(short, long, global = true)]
    pub tables: Option<PathBuf>,
    /// Increase log verbosity. Can be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the emoji found in some text.
    Parse {
        /// The text to parse. Read from stdin if omitted.
        text: Option<String>,
        /// Which kind of emoji to look for.
        #[arg(short, long, value_enum, default_value_t = Kind::All)]
        kind: Kind,
        /// Print JSON instead of a table.
        #[arg(short, long)]
        json: bool,
    },
    /// Replace `:shortcodes:` with the emoji they stand for.
    Emojify {
        /// The text to rewrite. Read from stdin if omitted.
        text: Option<String>,
    },
    /// Look up an emoji by name, or a name by emoji.
    Lookup {
        /// A shortcode name (`smile`, `:smile:`) or an emoji (`😄`).
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Everything, custom tags taking priority.
    All,
    Unicode,
    Text,
    Custom,
}

#[cfg(test)]
mod parse {
    use super::*;

    #[test]
    fn parse_defaults() {
        let args = Arguments::try_parse_from(["emoji-parser", "parse", "hi :smile:"]).unwrap();

        match args.command {
            Command::Parse { text, kind, json } => {
                assert_eq!(text.as_deref(), Some("hi :smile:"));
                assert_eq!(kind, Kind::All);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags() {
        let args = Arguments::try_parse_from([
            "emoji-parser", "lookup", "smile", "--tables", "assets/", "-vv",
        ])
        .unwrap();

        assert_eq!(args.tables, Some(PathBuf::from("assets/")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn kind_flag() {
        let args = Arguments::try_parse_from(["emoji-parser", "parse", "--kind", "custom", "--json"]).unwrap();

        assert!(matches!(args.command, Command::Parse { text: None, kind: Kind::Custom, json: true }));
    }
}
