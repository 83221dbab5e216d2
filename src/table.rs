//! An ordered collection of rows.

use crate::error::{CsvError, Result};
use crate::row::Row;

/// A full parsed file: rows in file order.
///
/// [`Table::get`] hands out copies: a row obtained that way can be modified
/// freely without touching the table. Stored rows are edited in place
/// through [`Table::get_mut`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Create a table pre-filled with `size` empty rows.
    pub fn with_size(size: usize) -> Self {
        Self {
            rows: vec![Row::new(); size],
        }
    }

    /// Copy of the row at `index`, or `None` when the index is past the end.
    pub fn get(&self, index: usize) -> Option<Row> {
        self.rows.get(index).cloned()
    }

    /// Stored row at `index` for in-place edits, or `None` when the index
    /// is past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Copy of the row at `index`, failing with [`CsvError::IndexOutOfRange`].
    pub fn row_checked(&self, index: usize) -> Result<Row> {
        self.get(index).ok_or(CsvError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Append a row. Always succeeds.
    pub fn add(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Remove the row at `index`, shifting later rows up.
    ///
    /// Returns `None` and leaves the table untouched when `index >= count()`.
    pub fn remove(&mut self, index: usize) -> Option<Row> {
        if index >= self.rows.len() {
            return None;
        }
        Some(self.rows.remove(index))
    }

    /// Number of rows in the table.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Borrowing iteration, used by the writer.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        [vec!["a", "b"], vec!["c"], vec!["d", "e", "f"]]
            .into_iter()
            .map(Row::from)
            .collect()
    }

    #[test]
    fn test_get_returns_copy() {
        let mut table = Table::new();
        let row = Row::from(vec!["a", "b"]);
        table.add(row.clone());

        let mut copy = table.get(0).unwrap();
        copy.add("c");
        copy.remove(0);

        assert_eq!(table.get(0), Some(row));
        assert_eq!(table.get(0).unwrap().count(), 2);
    }

    #[test]
    fn test_get_mut_edits_persist() {
        let mut table: Table = vec![Row::from(vec!["a", "b"])].into_iter().collect();

        let mut copy = table.get(0).unwrap();
        copy[0] = "ignored".to_string();
        assert_eq!(table.get(0), Some(Row::from(vec!["a", "b"])));

        let stored = table.get_mut(0).unwrap();
        stored[0] = "x".to_string();
        stored.add("c");
        assert_eq!(table.get(0), Some(Row::from(vec!["x", "b", "c"])));

        assert!(table.get_mut(1).is_none());
    }

    #[test]
    fn test_add_keeps_independent_copy() {
        let mut table = Table::new();
        let mut row = Row::from(vec!["x"]);
        table.add(row.clone());
        row.add("y");

        assert_eq!(table.get(0).unwrap().count(), 1);
    }

    #[test]
    fn test_rows_may_differ_in_length() {
        let table = sample_table();
        let counts: Vec<usize> = table.iter().map(Row::count).collect();
        assert_eq!(counts, vec![2, 1, 3]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut table = sample_table();
        let before = table.clone();

        assert!(table.remove(3).is_none());
        assert_eq!(table.count(), 3);
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_shifts_rows() {
        let mut table = sample_table();
        let removed = table.remove(0).unwrap();

        assert_eq!(removed, Row::from(vec!["a", "b"]));
        assert_eq!(table.count(), 2);
        assert_eq!(table.get(0), Some(Row::from(vec!["c"])));
    }

    #[test]
    fn test_row_checked() {
        let table = sample_table();
        assert_eq!(table.row_checked(1).unwrap(), Row::from(vec!["c"]));
        assert!(matches!(
            table.row_checked(10),
            Err(CsvError::IndexOutOfRange { index: 10, len: 3 })
        ));
    }

    #[test]
    fn test_clear_and_presized() {
        let mut table = sample_table();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);

        let presized = Table::with_size(2);
        assert_eq!(presized.count(), 2);
        assert!(presized.iter().all(Row::is_empty));

        assert_eq!(Table::with_capacity(8).count(), 0);
    }
}
