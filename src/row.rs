//! A single record: an ordered list of text fields.

use crate::error::{CsvError, Result};
use std::ops::{Index, IndexMut};

/// One logical record of a delimited file.
///
/// Fields are addressed by position, `0..count()`. Rows in the same table
/// may hold different numbers of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with room for `capacity` fields.
    ///
    /// The capacity is only an allocation hint; the row still grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Create a row pre-filled with `size` empty fields.
    pub fn with_size(size: usize) -> Self {
        Self {
            fields: vec![String::new(); size],
        }
    }

    /// Field at `index`, or `None` when the index is past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Mutable field at `index`, or `None` when the index is past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index)
    }

    /// Field at `index`, failing with [`CsvError::IndexOutOfRange`].
    pub fn field_checked(&self, index: usize) -> Result<&str> {
        self.get(index).ok_or(CsvError::IndexOutOfRange {
            index,
            len: self.fields.len(),
        })
    }

    /// Append a field. Always succeeds.
    pub fn add(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Remove the field at `index`, shifting later fields down.
    ///
    /// Returns `None` and leaves the row untouched when `index >= count()`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.fields.len() {
            return None;
        }
        Some(self.fields.remove(index))
    }

    /// Number of fields in the row.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    /// True when the row holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Remove every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// All fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Iterate over the fields as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Panicking accessor; see [`Row::field_checked`] for the fallible form.
impl Index<usize> for Row {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

/// Panicking mutable accessor; see [`Row::get_mut`] for the fallible form.
impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.fields[index]
    }
}
