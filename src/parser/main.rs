use crate::parser::decoder::{DecodeOptions, FitFile};
use crate::types::Record;
use crate::Result;
use std::path::Path;

/// Parse a FIT file and return its `record` samples
pub fn parse_fit_file(
    file_path: &Path,
    options: DecodeOptions,
    debug: bool,
) -> Result<Vec<Record>> {
    if debug {
        println!("=== PARSING FIT FILE ===");
        let metadata = std::fs::metadata(file_path)?;
        println!(
            "File size: {} bytes ({:.2} MB)",
            metadata.len(),
            metadata.len() as f64 / 1024.0 / 1024.0
        );
    }

    let fit_file = FitFile::open(file_path)?;
    Ok(collect_records(&fit_file, options, debug))
}

/// Parse FIT data from memory and return its `record` samples
pub fn parse_fit_bytes(data: &[u8], options: DecodeOptions, debug: bool) -> Result<Vec<Record>> {
    if debug {
        println!("=== PARSING FIT DATA ===");
        println!("Data size: {} bytes", data.len());
    }

    let fit_file = FitFile::from_bytes(data)?;
    Ok(collect_records(&fit_file, options, debug))
}

fn collect_records(fit_file: &FitFile, options: DecodeOptions, debug: bool) -> Vec<Record> {
    if debug {
        println!("Decoded {} messages", fit_file.message_count());
        for (kind, count) in fit_file.message_summary() {
            println!("  {kind}: {count}");
        }
    }

    let records = fit_file.records(options);

    if debug {
        println!("Found {} record messages", records.len());
    }

    records
}
