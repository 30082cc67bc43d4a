#![warn(clippy::perf, clippy::style, warnings)]

mod common;

mod prelude {
    pub use color_eyre::eyre::{bail, eyre, Context};
    pub use color_eyre::{Result, Section, SectionExt};
    pub use tracing::{debug, info, warn};
}

use std::io::Read;

use clap::Parser;
use emoji_parser::{EmojiParser, JsonDirectory};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use common::{Arguments, Command, Config, Kind};
use prelude::*;

fn main() -> Result<()> {
    let args = Arguments::parse();

    install_logging(args.verbose);
    color_eyre::install()?;

    let config = Config::locate(args.config.as_deref())?;
    let parser = build_parser(&args, &config)?;

    match args.command {
        Command::Parse { text, kind, json } => {
            let content = read_input(text)?;
            let emoji = match kind {
                Kind::All => parser.parse(&content),
                Kind::Unicode => parser.parse_unicode(&content, &[]),
                Kind::Text => parser.parse_text(&content, &[]),
                Kind::Custom => parser.parse_custom(&content),
            };

            common::print_emoji(&emoji, json)?;
        }
        Command::Emojify { text } => {
            let content = read_input(text)?;
            print!("{}", parser.emojify(&content));
        }
        Command::Lookup { query } => {
            common::print_lookup(&parser, &query)?;
        }
    }

    Ok(())
}

fn install_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();
}

/// Tables from `--tables`, then the config file, then the bundled sample.
fn build_parser(args: &Arguments, config: &Config) -> Result<EmojiParser> {
    let hosts = config.hosts.clone();

    let directory = args
        .tables
        .as_ref()
        .or(config.tables.directory.as_ref());

    let parser = match directory {
        Some(path) => {
            info!("Using emoji tables from {}.", path.display());

            EmojiParser::from_source(&JsonDirectory::new(path), hosts)
                .wrap_err("Could not load emoji tables.")
                .suggestion("The directory must contain UnicodeEmojis.json and UnicodeEmojisSVG.json.")?
        }
        None => {
            warn!("No emoji table directory configured - using the bundled sample tables.");
            EmojiParser::from_source(&emoji_parser::Bundled, hosts)?
        }
    };

    debug!(
        "Parser ready: {} names, {} sequences.",
        parser.tables().name_count(),
        parser.tables().sequence_count()
    );

    Ok(parser)
}

/// The positional argument if given, otherwise all of stdin.
fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("Could not read input from stdin.")?;

    Ok(buffer)
}
