//! Splitting schema files into statements.
//!
//! A schema file is read line by line. Lines starting with a comment prefix
//! are dropped whole, every other line is appended as-is to the statement
//! being built, and a line ending in the terminator closes the statement.
//! Joined lines get no separator, so `"SELECT\n1;"` becomes `"SELECT1;"`.
//! Quoting is not understood: a terminator inside a string literal at the end
//! of a line still closes the statement. Content left over at end of input
//! without a terminating line is dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::settings::ReaderSettings;

/// Lazily yields the statements of a line-oriented input, in input order.
pub struct Statements<R> {
    lines: Lines<R>,
    settings: ReaderSettings,
    pending: String,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> Statements<R> {
    pub fn new(reader: R) -> Self {
        Self::with_settings(reader, ReaderSettings::default())
    }

    pub fn with_settings(reader: R, settings: ReaderSettings) -> Self {
        Self {
            lines: reader.lines(),
            settings,
            pending: String::new(),
            line_number: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for Statements<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.finished = true;
                    if !self.pending.is_empty() {
                        debug!(pending = self.pending.len(), "discarding unterminated trailing content");
                        self.pending.clear();
                    }
                    return None;
                }
            };
            self.line_number += 1;

            if self.settings.is_comment(&line) {
                trace!(line = self.line_number, "skipping comment line");
                continue;
            }
            self.pending.push_str(&line);

            if self.settings.is_terminated(&line) {
                let statement = self.pending.trim().to_string();
                self.pending.clear();
                if !statement.is_empty() {
                    debug!(line = self.line_number, len = statement.len(), "statement complete");
                    return Some(Ok(statement));
                }
            }
        }
    }
}

/// Reads schema files with a given set of [`ReaderSettings`].
#[derive(Debug, Clone, Default)]
pub struct SchemaReader {
    settings: ReaderSettings,
}

impl SchemaReader {
    pub fn new(settings: ReaderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub fn statements<R: BufRead>(&self, reader: R) -> Statements<R> {
        Statements::with_settings(reader, self.settings.clone())
    }

    /// Collects every statement, failing on the first read error.
    pub fn read<R: Read>(&self, reader: R) -> Result<Vec<String>> {
        self.statements(BufReader::new(reader)).collect()
    }

    /// Opens and reads the file at `path`. The file handle is closed before
    /// returning, whether or not the read succeeded.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let statements = self.read(File::open(path)?)?;
        info!(path = %path.display(), count = statements.len(), "schema read");
        Ok(statements)
    }
}

/// Gets the statements present in a schema, using the default settings.
pub fn get_statements<R: Read>(reader: R) -> Result<Vec<String>> {
    SchemaReader::default().read(reader)
}

pub fn get_statements_from_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    SchemaReader::default().read_path(path)
}
