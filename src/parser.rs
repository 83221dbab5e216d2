//! Reading delimited text into rows and tables.

use crate::config::{ParserConfig, SplitMode};
use crate::error::{CsvError, Result};
use crate::row::Row;
use crate::table::Table;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Converts between delimited text and [`Table`]s.
///
/// Delimiters are fixed at construction. A parser holds no state between
/// calls besides its configuration, and every file it opens is closed
/// before the call returns.
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    config: ParserConfig,
}

impl CsvParser {
    /// Create a parser with explicit delimiters and default settings otherwise.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let parser = CsvParser::new(",", csv_table::CRLF)?;
    /// let table = parser.parse_file("data.csv")?;
    /// ```
    pub fn new(
        field_delimiter: impl Into<String>,
        row_delimiter: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(ParserConfig::new(field_delimiter, row_delimiter))
    }

    /// Create a parser from a full configuration.
    pub fn from_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this parser was built from.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Split one line into fields according to the configured [`SplitMode`].
    pub fn parse_line(&self, line: &str) -> Row {
        let row: Row = match self.config.split_mode {
            SplitMode::Standard => line.split(self.config.field_delimiter.as_str()).collect(),
            SplitMode::Legacy => split_legacy(line, &self.config.field_delimiter),
        };
        trace!("Split {:?} into {} fields", line, row.count());
        row
    }

    /// Split an entire buffer into rows.
    ///
    /// Parsing stops at the first empty line. This drops the empty row a
    /// trailing row delimiter would otherwise produce, but it also drops
    /// every row after a blank line in the middle of the text.
    pub fn parse_str(&self, text: &str) -> Table {
        self.parse_bytes(text.as_bytes())
    }

    /// Split raw file contents into rows.
    ///
    /// Rows are cut on the row delimiter's bytes, so the input need not be
    /// valid UTF-8. Each line is decoded lossily before field splitting.
    /// Stops at the first empty line, like [`CsvParser::parse_str`].
    pub fn parse_bytes(&self, data: &[u8]) -> Table {
        let delimiter = self.config.row_delimiter.as_bytes();
        let mut table = Table::new();
        let mut remaining = data;

        while !remaining.is_empty() {
            let line = match find_bytes(remaining, delimiter, 0) {
                Some(pos) => {
                    let line = &remaining[..pos];
                    remaining = &remaining[pos + delimiter.len()..];
                    line
                }
                // No terminator left: this is the last line
                None => std::mem::take(&mut remaining),
            };

            if line.is_empty() {
                if !remaining.is_empty() {
                    warn!(
                        "Empty line after row {}, ignoring remaining {} bytes",
                        table.count(),
                        remaining.len()
                    );
                }
                break;
            }

            table.add(self.parse_line(&String::from_utf8_lossy(line)));
        }

        debug!("Parsed {} rows", table.count());
        table
    }

    /// Read a whole file into memory and parse it into a [`Table`].
    ///
    /// Fails only when the file cannot be opened or read. Content that is
    /// not valid UTF-8 is decoded lossily.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| CsvError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|source| CsvError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Read {} bytes from '{}'", contents.len(), path.display());
        Ok(self.parse_bytes(&contents))
    }

    /// Read the first line of the configured file and split it into a [`Row`].
    ///
    /// The line ends at the first `\n` (a preceding `\r` is dropped too),
    /// regardless of the configured row delimiter. An empty file yields the
    /// split of an empty line.
    pub fn read_single_row(&self) -> Result<Row> {
        let path = self.config.file_name.as_path();
        let file = File::open(path).map_err(|source| CsvError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut line = Vec::new();
        BufReader::new(file)
            .read_until(b'\n', &mut line)
            .map_err(|source| CsvError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        debug!("Read first line of '{}'", path.display());
        Ok(self.parse_line(&String::from_utf8_lossy(&line)))
    }
}

/// Field splitting with the historical search offsets.
///
/// Positions are byte offsets. After the first search, each search starts
/// one byte past the previous delimiter's start, and a field extracted
/// while the previous delimiter sits at 0 spans from 0.
fn split_legacy(line: &str, delimiter: &str) -> Row {
    let bytes = line.as_bytes();
    let needle = delimiter.as_bytes();
    let mut row = Row::new();
    let mut last = 0usize;
    let mut first = true;

    loop {
        let from = if first { last } else { last + 1 };
        first = false;

        let next = find_bytes(bytes, needle, from);
        let range = match next {
            None => (last + 1).min(bytes.len())..bytes.len(),
            Some(next) if last == 0 => 0..next,
            Some(next) => last + 1..next,
        };
        row.add(String::from_utf8_lossy(&bytes[range]).into_owned());

        match next {
            Some(next) => last = next,
            None => break,
        }
    }

    row
}

fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
