//! Record-to-table flattening
//!
//! Turns a sequence of heterogeneous records into a rectangular [`Table`].
//! The column set is only known once every record has been seen, so the
//! transform runs in passes over a buffered slice: discover field names,
//! sort them, then materialize one row per record.

use crate::types::{Record, Row, Table};
use std::collections::BTreeSet;

/// Collect the union of field names across all records, sorted by byte order
pub fn discover_schema(records: &[Record]) -> Vec<String> {
    let mut names: BTreeSet<String> = BTreeSet::new();
    for record in records {
        for field in record.iter() {
            if !names.contains(field.name.as_str()) {
                names.insert(field.name.clone());
            }
        }
    }
    names.into_iter().collect()
}

/// Build a table with one row per record, in input order
///
/// A field name repeated within one record keeps its last value.
pub fn flatten(records: &[Record]) -> Table {
    let schema = discover_schema(records);

    let rows = records
        .iter()
        .map(|record| {
            let mut row = Row::new();
            for field in record.iter() {
                row.insert(field.name.clone(), field.value.clone());
            }
            row
        })
        .collect();

    Table { schema, rows }
}

/// Flatten a one-shot record source
///
/// The source is buffered before any pass runs, so both passes see every record.
pub fn flatten_iter<I>(records: I) -> Table
where
    I: IntoIterator<Item = Record>,
{
    let buffered: Vec<Record> = records.into_iter().collect();
    flatten(&buffered)
}
