//! Delimiter-separated text tables.
//!
//! This crate reads and writes flat text files whose rows are separated by
//! a row delimiter and whose fields are separated by a field delimiter.
//! Both delimiters are arbitrary non-empty strings. There is no quoting or
//! escaping: every field is an opaque string that must not contain either
//! delimiter.
//!
//! # Modules
//!
//! - [`row`] - a single record of text fields
//! - [`table`] - an ordered collection of rows
//! - [`parser`] - text → [`Table`] conversion
//! - [`writer`] - [`Table`] → text conversion
//! - [`config`] - delimiters, split mode and YAML loading
//!
//! # Example
//!
//! ```ignore
//! use csv_table::{CsvParser, Row, Table};
//!
//! let parser = CsvParser::new(";", "\n")?;
//!
//! let mut table = Table::new();
//! table.add(Row::from(vec!["id", "name"]));
//! table.add(Row::from(vec!["1", "alice"]));
//! parser.write_file("people.csv", &table)?;
//!
//! let parsed = parser.parse_file("people.csv")?;
//! assert_eq!(parsed, table);
//! ```

pub mod config;
mod error;
pub mod parser;
pub mod row;
pub mod table;
pub mod writer;

pub use config::{ParserConfig, SplitMode, CRLF, DEFAULT_FIELD_DELIMITER, DEFAULT_ROW_DELIMITER};
pub use error::{CsvError, Result};
pub use parser::CsvParser;
pub use row::Row;
pub use table::Table;
pub use writer::WriteStats;
