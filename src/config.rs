//! Parser configuration.

use crate::error::{CsvError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default field delimiter.
pub const DEFAULT_FIELD_DELIMITER: &str = ";";

/// Default row delimiter.
///
/// A bare line feed. Files written on Windows-style line endings need
/// [`CRLF`] instead.
pub const DEFAULT_ROW_DELIMITER: &str = "\n";

/// Carriage return + line feed row delimiter.
pub const CRLF: &str = "\r\n";

/// File read by [`crate::CsvParser::read_single_row`] unless configured otherwise.
pub const DEFAULT_FILE_NAME: &str = "default.csv";

/// How a line is cut into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Every delimiter occurrence separates two fields.
    #[default]
    Standard,

    /// Reproduces the historical splitting behavior byte for byte.
    ///
    /// Each search after the first resumes one byte past the previous
    /// delimiter's start, and the trailing field starts one byte past the
    /// previous delimiter even when none was found. A line without any
    /// delimiter therefore loses its first byte, and a delimiter at
    /// position 0 folds into the second field.
    Legacy,
}

/// Delimiters and file settings for a [`crate::CsvParser`].
///
/// Can be built in code or loaded from YAML:
///
/// ```yaml
/// field_delimiter: ","
/// row_delimiter: "\r\n"
/// file_name: data.csv
/// split_mode: legacy
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Separates fields within a row.
    pub field_delimiter: String,

    /// Separates rows within a file.
    pub row_delimiter: String,

    /// Target of the single-row read.
    pub file_name: PathBuf,

    /// How `parse_line` locates field delimiters.
    pub split_mode: SplitMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            field_delimiter: DEFAULT_FIELD_DELIMITER.to_string(),
            row_delimiter: DEFAULT_ROW_DELIMITER.to_string(),
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            split_mode: SplitMode::default(),
        }
    }
}

impl ParserConfig {
    /// Config with the given delimiters; everything else at its default.
    ///
    /// Not validated here: [`CsvParser::from_config`](crate::CsvParser::from_config)
    /// rejects empty delimiters.
    pub fn new(field_delimiter: impl Into<String>, row_delimiter: impl Into<String>) -> Self {
        Self {
            field_delimiter: field_delimiter.into(),
            row_delimiter: row_delimiter.into(),
            ..Self::default()
        }
    }

    /// Set the file read by the single-row read.
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Select the field-splitting convention.
    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }

    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ParserConfig =
            serde_yaml::from_str(yaml).map_err(|e| CsvError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CsvError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Both delimiters must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.field_delimiter.is_empty() {
            return Err(CsvError::InvalidDelimiter(
                "field delimiter must not be empty".to_string(),
            ));
        }
        if self.row_delimiter.is_empty() {
            return Err(CsvError::InvalidDelimiter(
                "row delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
