use std::path::{Path, PathBuf};

use emoji_parser::Hosts;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

use super::CONFIG_FILENAME;

/// Represents the contents of `emoji.toml`.
#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct Config {
    pub hosts: Hosts,
    pub tables: Tables,
}

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct Tables {
    /// Directory holding `UnicodeEmojis.json` and `UnicodeEmojisSVG.json`.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration at `explicit`, or `emoji.toml` in the current directory.
    ///
    /// A missing default file just means defaults; a missing explicit one is an error.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = Path::new(CONFIG_FILENAME);

                match path.is_file() {
                    true => Self::from_path(path),
                    false => {
                        debug!("No {CONFIG_FILENAME} found, using default configuration.");
                        Ok(Self::default())
                    }
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_raw = match path.exists() {
            true => {
                std::fs::read_to_string(path)
                    .wrap_err("Could not read in configuration file.")
                    .suggestion("The configuration file was found, but couldn't be read - try checking your file permissions.")?
            },
            false => bail!("Configuration file {} not found.", path.display())
        };

        Self::from_toml(&toml_raw)
    }

    fn from_toml(toml_raw: &str) -> Result<Self> {
        toml::from_str(toml_raw)
            .map_err(|err| eyre!("Malformed configuration file.").section(err.to_string().header("Details:")))
    }
}

#[cfg(test)]
mod config {
    use indoc::indoc;

    use super::*;

    #[test]
    fn full() {
        let config = Config::from_toml(indoc! {r#"
            [hosts]
            assets = "assets.example"
            cdn = "cdn.example"

            [tables]
            directory = "data/"
        "#})
        .unwrap();

        assert_eq!(config.hosts.assets, "assets.example");
        assert_eq!(config.hosts.cdn, "cdn.example");
        assert_eq!(config.tables.directory, Some(PathBuf::from("data/")));
    }

    #[test]
    fn partial() {
        let config = Config::from_toml(indoc! {r#"
            [hosts]
            cdn = "cdn.example"
        "#})
        .unwrap();

        assert_eq!(config.hosts.assets, Hosts::default().assets);
        assert_eq!(config.hosts.cdn, "cdn.example");
        assert_eq!(config.tables.directory, None);
    }

    #[test]
    fn empty() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.hosts, Hosts::default());
    }

    #[test]
    fn malformed() {
        assert!(Config::from_toml("[hosts]\nassets = 5").is_err());
    }

    #[test]
    fn missing_explicit_file() {
        assert!(Config::locate(Some(Path::new("/definitely/not/here/emoji.toml"))).is_err());
    }
}
