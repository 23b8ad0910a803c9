use crate::types::FieldValue;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One output row, keyed by column name
///
/// Columns missing from the map are absent and render as empty cells.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    pub values: HashMap<String, FieldValue>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a column value, replacing any earlier value for the same column
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Number of columns with a value in this row
    pub fn present_count(&self) -> usize {
        self.values.len()
    }
}

/// Rectangular view over a set of heterogeneous records
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Column names, sorted
    pub schema: Vec<String>,
    /// One row per input record, in input order
    pub rows: Vec<Row>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of `row` in schema order, `None` for absent columns
    pub fn cells<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = Option<&'a FieldValue>> + 'a {
        self.schema.iter().map(move |name| row.get(name))
    }

    /// Rendered cells of every row, absent columns as empty strings
    pub fn string_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(move |row| {
            self.cells(row)
                .map(|cell| cell.map(|value| value.to_string()).unwrap_or_default())
                .collect()
        })
    }
}
