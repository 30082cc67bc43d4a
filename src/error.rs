use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Raised when emoji tables can't be read or parsed.
///
/// A parser can't be built without its tables, so this only ever comes out of construction;
/// parsing itself never fails.
#[derive(Debug)]
pub enum LoadError {
    /// A table file couldn't be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A table wasn't a JSON object of strings to strings.
    Json {
        table: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn json(table: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            table: table.into(),
            source,
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "could not read emoji table at {}", path.display()),
            Self::Json { table, .. } => write!(f, "emoji table {table} is not a string-to-string JSON object"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
