//! CLI tool to extract search-run reports from a delimited log into CSV.

use clap::Parser;
use runlog_extract::extract_file;
use std::path::PathBuf;
use std::process;

/// Convert a delimited search-run log into a CSV dataset.
///
/// The input is split on 41-hyphen delimiter lines; each block's first five
/// lines yield one row. Malformed blocks are skipped whole.
#[derive(Parser)]
#[command(name = "runlog-extract")]
struct Cli {
    /// Input log file (delimiter-separated run blocks)
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "runs.csv")]
    output: PathBuf,

    /// Show paths and skipped-block count on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("Input:  {}", cli.input.display());
        eprintln!("Output: {}", cli.output.display());
    }

    match extract_file(&cli.input, &cli.output) {
        Ok(summary) => {
            if cli.verbose && summary.skipped > 0 {
                eprintln!("Skipped {} malformed block(s)", summary.skipped);
            }
            println!(
                "Extracted {} runs to {}",
                summary.records.len(),
                cli.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
