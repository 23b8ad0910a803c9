//! Export functionality for FIT data
//!
//! Contains CSV path computation, table serialization, and the end-to-end
//! FIT to CSV conversion used by the command-line binary.

use crate::flatten::flatten;
use crate::parser::{parse_fit_file, DecodeOptions};
use crate::types::Table;
use crate::{ConversionError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export options for controlling CSV output
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Destination CSV file (default: input path with a `.csv` extension)
    pub output_path: Option<PathBuf>,
    /// Append units to column names
    pub include_units: bool,
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub input_path: PathBuf,
    pub csv_path: PathBuf,
    pub row_count: usize,
    pub column_count: usize,
}

/// Compute the CSV output path for an input file
///
/// An explicit output path is used as given; otherwise the input's extension is
/// replaced with `csv` (or added when the input has none).
pub fn compute_csv_path(input_path: &Path, explicit_output: Option<&Path>) -> PathBuf {
    match explicit_output {
        Some(path) => path.to_path_buf(),
        None => input_path.with_extension("csv"),
    }
}

/// Write a table as CSV: header row, then one row per record in schema order
pub fn write_table<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    if table.schema.is_empty() {
        // No columns: a blank header line and a blank line per row
        for _ in 0..=table.row_count() {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        return Ok(());
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&table.schema)?;
    for row in table.string_rows() {
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Export a table to a CSV file
///
/// Creates missing parent directories. A file left half-written by a failed
/// write is removed before the error is returned.
pub fn export_to_csv(table: &Table, csv_path: &Path) -> Result<()> {
    if let Some(parent) = csv_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                ConversionError::Export(format!(
                    "Failed to create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let file = File::create(csv_path).map_err(|e| {
        ConversionError::Export(format!(
            "Failed to create CSV file {}: {e}",
            csv_path.display()
        ))
    })?;
    let result = write_table(table, BufWriter::new(file));
    if result.is_err() {
        let _ = fs::remove_file(csv_path);
    }
    result
}

/// Convert a FIT file to CSV
///
/// The whole table is built in memory before the output file is created, so a
/// decoding failure never leaves an output file behind.
pub fn convert_fit_to_csv(
    input_path: &Path,
    options: &ExportOptions,
    debug: bool,
) -> Result<ConversionOutput> {
    let csv_path = compute_csv_path(input_path, options.output_path.as_deref());

    let decode_options = DecodeOptions {
        include_units: options.include_units,
    };
    let records = parse_fit_file(input_path, decode_options, debug)?;
    let table = flatten(&records);

    if debug {
        println!("=== FLATTENED TABLE ===");
        println!("Columns ({}): {}", table.column_count(), table.schema.join(", "));
        println!("Rows: {}", table.row_count());
        println!("Writing CSV to: {}", csv_path.display());
    }

    export_to_csv(&table, &csv_path)?;

    Ok(ConversionOutput {
        input_path: input_path.to_path_buf(),
        csv_path,
        row_count: table.row_count(),
        column_count: table.column_count(),
    })
}
