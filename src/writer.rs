//! Serializing tables back to delimited text.

use crate::error::{CsvError, Result};
use crate::parser::CsvParser;
use crate::table::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Counters from a write operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Number of rows written, each terminated by the row delimiter.
    pub rows_written: u64,
    /// Number of fields written across all rows.
    pub fields_written: u64,
    /// Bytes handed to the writer, delimiters included.
    pub bytes_written: u64,
}

impl CsvParser {
    /// Write `table` to `path`, creating or truncating the file.
    ///
    /// The buffer is flushed and the file synced before returning, so a
    /// failure on close surfaces as [`CsvError::StreamWrite`]. A failure
    /// part-way leaves the file partially written.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, table: &Table) -> Result<WriteStats> {
        let path = path.as_ref();
        let stream_error = |source: std::io::Error| CsvError::StreamWrite {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|source| CsvError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let stats = self.write_to(&mut writer, table).map_err(stream_error)?;
        let file = writer
            .into_inner()
            .map_err(|e| stream_error(e.into_error()))?;
        file.sync_all().map_err(stream_error)?;

        debug!(
            "Wrote {} rows ({} bytes) to '{}'",
            stats.rows_written,
            stats.bytes_written,
            path.display()
        );
        Ok(stats)
    }

    /// Write `table` to any writer.
    ///
    /// Fields are joined by the field delimiter and every row, the last one
    /// included, is followed by the row delimiter. Stops at the first
    /// failed write.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        table: &Table,
    ) -> std::io::Result<WriteStats> {
        let field_delimiter = self.config().field_delimiter.as_bytes();
        let row_delimiter = self.config().row_delimiter.as_bytes();
        let mut stats = WriteStats::default();

        for row in table.iter() {
            for (idx, field) in row.iter().enumerate() {
                if idx > 0 {
                    writer.write_all(field_delimiter)?;
                    stats.bytes_written += field_delimiter.len() as u64;
                }
                writer.write_all(field.as_bytes())?;
                stats.bytes_written += field.len() as u64;
                stats.fields_written += 1;
            }
            writer.write_all(row_delimiter)?;
            stats.bytes_written += row_delimiter.len() as u64;
            stats.rows_written += 1;

            trace!("Wrote row {} with {} fields", stats.rows_written, row.count());
        }

        Ok(stats)
    }

    /// Render `table` as delimited text in memory, using [`CsvParser::write_to`].
    pub fn serialize(&self, table: &Table) -> String {
        let mut buf = Vec::new();
        self.write_to(&mut buf, table)
            .expect("writing into a Vec<u8> cannot fail");
        // Fields and delimiters are all `String`s, so the bytes are valid UTF-8
        String::from_utf8_lossy(&buf).into_owned()
    }
}
