//! FIT to CSV Library
//!
//! A Rust library for converting FIT activity files (as written by fitness and
//! GPS devices) into flat CSV tables: one row per `record` sample, one column
//! per distinct field name seen anywhere in the file.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Flatten decoded records into a table:
//! ```rust
//! use fit_to_csv::{flatten, Record};
//!
//! let records = vec![
//!     Record::new().with("heart_rate", 120i64).with("speed", 5.2),
//!     Record::new().with("heart_rate", 125i64).with("cadence", 80i64),
//! ];
//! let table = flatten(&records);
//! assert_eq!(table.schema, vec!["cadence", "heart_rate", "speed"]);
//! assert_eq!(table.row_count(), 2);
//! ```
//!
//! Convert a file end to end:
//! ```rust,no_run
//! use fit_to_csv::{convert_fit_to_csv, ExportOptions};
//! use std::path::Path;
//!
//! let options = ExportOptions::default();
//! let output = convert_fit_to_csv(Path::new("ride.fit"), &options, false).unwrap();
//! println!("Wrote {} rows to {}", output.row_count, output.csv_path.display());
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_fit_file`] - Decode a FIT file and return its record samples
//! - [`parse_fit_bytes`] - Decode FIT data from memory
//! - [`FitFile`] - Decoded file with re-invokable message access
//!
//! ## Flattening Functions
//! - [`flatten`] - Build a [`Table`] from buffered records
//! - [`flatten_iter`] - Buffer a one-shot record source, then flatten
//! - [`discover_schema`] - Sorted union of field names
//!
//! ## Export Functions
//! - [`convert_fit_to_csv`] - Decode, flatten, and write a CSV file
//! - [`export_to_csv`] - Write a table to a CSV file
//! - [`write_table`] - Write a table as CSV to any writer
//! - [`compute_csv_path`] - Derive the output path from the input path

// Module declarations
pub mod conversion;
pub mod error;
#[cfg(feature = "csv")]
pub mod export;
pub mod flatten;
pub mod parser;
pub mod types;

pub use conversion::*;
pub use error::*;
#[cfg(feature = "csv")]
pub use export::*;
pub use flatten::*;
pub use parser::*;
pub use types::*;
