//! Where the raw emoji tables come from.

use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::tables::RawTables;
use crate::prelude::*;

pub const UNICODE_TABLE: &str = "UnicodeEmojis.json";
pub const ASSET_TABLE: &str = "UnicodeEmojisSVG.json";

/// Produces the raw tables a parser is built from.
pub trait TableSource {
    fn load(&self) -> Result<RawTables, LoadError>;
}

impl TableSource for RawTables {
    fn load(&self) -> Result<RawTables, LoadError> {
        Ok(self.clone())
    }
}

/// A small sample of the published tables, compiled into the crate.
///
/// Enough for tests and demos. Point a [`JsonDirectory`] at the full files for real use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl TableSource for Bundled {
    fn load(&self) -> Result<RawTables, LoadError> {
        let unicode = include_str!("../assets/UnicodeEmojis.json");
        let assets = include_str!("../assets/UnicodeEmojisSVG.json");

        Ok(RawTables {
            unicode_emojis: parse_table(UNICODE_TABLE, unicode)?,
            unicode_emojis_svg: parse_table(ASSET_TABLE, assets)?,
        })
    }
}

/// A directory holding `UnicodeEmojis.json` and `UnicodeEmojisSVG.json`.
#[derive(Debug, Clone)]
pub struct JsonDirectory(pub PathBuf);

impl JsonDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    fn read(&self, table: &str) -> Result<AHashMap<String, String>, LoadError> {
        let path = self.0.join(table);

        debug!("Loading emoji table from {}...", path.display());

        let raw = std::fs::read_to_string(&path).map_err(|err| LoadError::io(&path, err))?;
        parse_table(table, &raw)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl TableSource for JsonDirectory {
    fn load(&self) -> Result<RawTables, LoadError> {
        Ok(RawTables {
            unicode_emojis: self.read(UNICODE_TABLE)?,
            unicode_emojis_svg: self.read(ASSET_TABLE)?,
        })
    }
}

fn parse_table(table: &str, raw: &str) -> Result<AHashMap<String, String>, LoadError> {
    serde_json::from_str(raw).map_err(|err| LoadError::json(table, err))
}

#[cfg(test)]
mod load {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn tables_dir(unicode: Option<&str>, assets: Option<&str>) -> TempDir {
        let dir = tempfile::tempdir().unwrap();

        if let Some(unicode) = unicode {
            fs::write(dir.path().join(UNICODE_TABLE), unicode).unwrap();
        }
        if let Some(assets) = assets {
            fs::write(dir.path().join(ASSET_TABLE), assets).unwrap();
        }

        dir
    }

    #[test]
    fn bundled() {
        let raw = Bundled.load().unwrap();

        assert_eq!(raw.unicode_emojis.get("smile").map(String::as_str), Some("😄"));
        assert_eq!(raw.unicode_emojis.get("😄").map(String::as_str), Some("smile"));
        assert!(raw.unicode_emojis_svg.contains_key("1f604"));
    }

    #[test]
    fn directory() {
        let dir = tables_dir(Some(r#"{"ok": "👌", "👌": "ok"}"#), Some(r#"{"1f44c": "abc"}"#));
        let source = JsonDirectory::new(dir.path());

        assert_eq!(source.path(), dir.path());

        let raw = source.load().unwrap();

        assert_eq!(raw.unicode_emojis.len(), 2);
        assert_eq!(raw.unicode_emojis_svg.get("1f44c").map(String::as_str), Some("abc"));
    }

    #[test]
    fn missing_file() {
        let dir = tables_dir(Some("{}"), None);

        let err = JsonDirectory::new(dir.path()).load().unwrap_err();

        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with(ASSET_TABLE)),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_table() {
        let dir = tables_dir(Some(r#"{"smile": 1}"#), Some("{}"));

        let err = JsonDirectory::new(dir.path()).load().unwrap_err();

        assert!(matches!(err, LoadError::Json { ref table, .. } if table == UNICODE_TABLE));
        assert!(err.to_string().contains(UNICODE_TABLE));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn in_memory() {
        let mut raw = RawTables::default();
        raw.unicode_emojis.insert("smile".into(), "😄".into());

        let parser = crate::EmojiParser::from_source(&raw, Hosts::default()).unwrap();

        assert_eq!(parser.parse_text(":smile:", &[]).len(), 1);
        assert_eq!(parser.parse_unicode("😄", &[]).len(), 0);
    }
}
