//! CLI binary for FIT to CSV conversion

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use fit_to_csv::{convert_fit_to_csv, ExportOptions};
use std::io::Write;
use std::path::PathBuf;

fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() && sha != "VERGEN_IDEMPOTENT_OUTPUT" => {
            format!("{} ({sha})", env!("CARGO_PKG_VERSION"))
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn build_command() -> Command {
    Command::new("fit_to_csv")
        .version(version_string())
        .about(
            "Convert a FIT activity file to CSV. \
             One row per record message, one column per field name.",
        )
        .arg(
            Arg::new("input")
                .help("FIT file to convert")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("CSV file to write (default: input file name with a .csv extension)")
                .required(false)
                .index(2),
        )
        .arg(
            // Anything after the output path is accepted and ignored
            Arg::new("extra")
                .required(false)
                .num_args(1..)
                .index(3)
                .hide(true),
        )
        .arg(
            Arg::new("units")
                .long("units")
                .help("Append units to column names, e.g. \"speed (m/s)\"")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed decoding information")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Run one conversion and report it on `out`, returning the process exit code
fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<i32> {
    let debug = matches.get_flag("debug");
    let include_units = matches.get_flag("units");

    let input_path = match matches.get_one::<String>("input") {
        Some(input) => PathBuf::from(input),
        None => {
            // No input file provided, show usage and fail
            writeln!(out, "{}", build_command().render_help())?;
            return Ok(1);
        }
    };

    let export_options = ExportOptions {
        output_path: matches.get_one::<String>("output").map(PathBuf::from),
        include_units,
    };

    if debug {
        writeln!(out, "Input: {}", input_path.display())?;
        writeln!(out, "Options: {export_options:?}")?;
    }

    match convert_fit_to_csv(&input_path, &export_options, debug) {
        Ok(output) => {
            writeln!(
                out,
                "Successfully converted {} to {}",
                output.input_path.display(),
                output.csv_path.display()
            )?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "Error converting FIT file: {e}")?;
            Ok(1)
        }
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let stdout = std::io::stdout();
    let exit_code = run(&matches, &mut stdout.lock())?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
