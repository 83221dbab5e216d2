//! Integration tests for writing tables to disk and parsing them back.

use anyhow::Result;
use csv_table::{CsvParser, ParserConfig, Row, SplitMode, Table, CRLF};
use tempfile::TempDir;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

fn table_of(rows: &[&[&str]]) -> Table {
    rows.iter()
        .map(|fields| fields.iter().copied().collect::<Row>())
        .collect()
}

#[test]
fn test_round_trip_default_delimiters() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("people.csv");

    let parser = CsvParser::default();
    let table = table_of(&[
        &["id", "name", "email"],
        &["1", "alice", "alice@example.com"],
        &["2", "bob", ""],
        &["3"],
    ]);

    let stats = parser.write_file(&path, &table)?;
    info!("Wrote {:?}", stats);
    assert_eq!(stats.rows_written, 4);

    let parsed = parser.parse_file(&path)?;
    assert_eq!(parsed, table);
    Ok(())
}

#[test]
fn test_round_trip_multi_char_delimiters() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("data.txt");

    let parser = CsvParser::new("<>", CRLF)?;
    let table = table_of(&[
        &["a;b", "c,d", "e f"],
        &["line\nbreak", "tab\there"],
        &["ünïcödé", "ß"],
    ]);

    parser.write_file(&path, &table)?;
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "a;b<>c,d<>e f\r\nline\nbreak<>tab\there\r\nünïcödé<>ß\r\n"
    );

    assert_eq!(parser.parse_file(&path)?, table);
    Ok(())
}

#[test]
fn test_round_trip_legacy_mode_multi_field_rows() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("legacy.csv");

    let parser = CsvParser::from_config(
        ParserConfig::new(",", "\n").with_split_mode(SplitMode::Legacy),
    )?;
    // Legacy splitting round-trips rows whose first field is non-empty and
    // which contain at least one delimiter.
    let table = table_of(&[&["a", "b", "c"], &["key", "", "value"], &["x", "y"]]);

    parser.write_file(&path, &table)?;
    assert_eq!(parser.parse_file(&path)?, table);
    Ok(())
}

#[test]
fn test_legacy_mode_single_field_rows_lose_first_byte() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("single.csv");
    std::fs::write(&path, "abc\nxyz\n")?;

    let parser =
        CsvParser::from_config(ParserConfig::default().with_split_mode(SplitMode::Legacy))?;

    let parsed = parser.parse_file(&path)?;
    assert_eq!(parsed, table_of(&[&["bc"], &["yz"]]));
    Ok(())
}

#[test]
fn test_empty_row_does_not_survive_round_trip() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("gap.csv");

    let parser = CsvParser::default();
    let table = table_of(&[&["a"], &[], &["b"]]);

    parser.write_file(&path, &table)?;
    assert_eq!(std::fs::read_to_string(&path)?, "a\n\nb\n");

    // Parsing stops at the blank line.
    let parsed = parser.parse_file(&path)?;
    assert_eq!(parsed, table_of(&[&["a"]]));
    Ok(())
}

#[test]
fn test_write_empty_table() -> Result<()> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.csv");

    let parser = CsvParser::default();
    let stats = parser.write_file(&path, &Table::new())?;

    assert_eq!(stats.rows_written, 0);
    assert_eq!(std::fs::metadata(&path)?.len(), 0);
    assert!(parser.parse_file(&path)?.is_empty());
    Ok(())
}
