//! Reader configuration.
//!
//! The defaults match the conventions of plain schema files: lines starting
//! with `--` or `#` are comments and a line ending in `;` closes a statement.
//! A settings file can override either, e.g. in TOML:
//!
//! ```toml
//! comment_prefixes = ["--", "//"]
//! terminator = ";"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchemaUtilError};

pub const DEFAULT_COMMENT_PREFIXES: [&str; 2] = ["--", "#"];
pub const DEFAULT_TERMINATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    pub comment_prefixes: Vec<String>,
    pub terminator: String,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            comment_prefixes: DEFAULT_COMMENT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}

impl ReaderSettings {
    /// Reads settings from a file whose format is picked by its extension.
    /// Keys absent from the file keep their default values. An empty
    /// terminator is rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize::<ReaderSettings>()?;
        if settings.terminator.is_empty() {
            return Err(SchemaUtilError::Config("terminator must not be empty".to_string()));
        }
        Ok(settings)
    }

    /// True when the whole line is a comment. Empty prefixes never match.
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
    }

    /// True when the line ends with the terminator. An empty terminator
    /// never matches, so nothing is ever emitted with it.
    pub fn is_terminated(&self, line: &str) -> bool {
        !self.terminator.is_empty() && line.ends_with(self.terminator.as_str())
    }
}
