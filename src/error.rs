//! Error type for the two fatal failure modes: reading the input log and
//! writing the output CSV. Malformed blocks are not errors; they are skipped
//! during extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read input file '{}': {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to write output file '{}': {source}", path.display())]
    WriteOutput { path: PathBuf, source: csv::Error },
}
