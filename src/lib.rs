//! # runlog-extract
//!
//! Converts a free-form log of search-algorithm run reports into a structured
//! CSV dataset.
//!
//! The input is a text file of repeated blocks separated by a 41-hyphen
//! delimiter line. Each block describes one run of a search algorithm:
//!
//! ```text
//! Initial State: 1 2 3 | h = 5
//! 0.0123 seconds
//! Nodes expanded: 10
//! Solution length: 3
//! Total cost: 7
//! ```
//!
//! Six fields are pulled out of the first five lines of each block with
//! pattern matching. Blocks that are too short or fail any pattern are
//! skipped whole; surviving runs are written, in input order, as rows of a
//! CSV file with a fixed header.
//!
//! ## Example
//!
//! ```
//! use runlog_extract::extract_content;
//!
//! let log = "\
//! Initial State: 1 2 3 | h = 5
//! 0.0123 seconds
//! Nodes expanded: 10
//! Solution length: 3
//! Total cost: 7";
//!
//! let summary = extract_content(log);
//! assert_eq!(summary.records.len(), 1);
//! assert_eq!(summary.records[0].initial_state, "1 2 3");
//! assert_eq!(summary.records[0].h, 5);
//! ```

pub mod error;
pub mod extract;
pub mod record;
pub mod writer;

pub use error::ExtractError;
pub use extract::{
    BlockPatterns, DELIMITER, ExtractSummary, extract_content, extract_file, split_blocks,
};
pub use record::RunRecord;
pub use writer::write_csv;
