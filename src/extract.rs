//! Block splitting and per-field pattern extraction.
//!
//! Run-log format:
//! ```text
//! Initial State: 1 2 3 | h = 5
//! 0.0123 seconds
//! Nodes expanded: 10
//! Solution length: 3
//! Total cost: 7
//! -----------------------------------------
//! <next block...>
//! ```
//!
//! Extraction rules:
//! - Blocks are separated by the exact 41-hyphen delimiter line
//! - Lines 0-4 of a block (after trimming the block) carry the six fields
//! - Each pattern is a substring search within its line, not anchored
//! - A block with fewer than 5 lines, a failed match, or a capture that does
//!   not convert to its field type is skipped whole -- no partial records
//! - Surviving records keep input order; nothing is deduplicated

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::record::RunRecord;
use crate::writer::write_csv;

/// Delimiter line separating run blocks: exactly 41 hyphens.
pub const DELIMITER: &str = "-----------------------------------------";

/// A block needs at least this many lines before field extraction is tried.
const MIN_BLOCK_LINES: usize = 5;

/// Split log content into candidate block strings, in input order.
///
/// Exact substring split; empty fragments from delimiters at the start or
/// end of the file pass through and die on the line-count check.
pub fn split_blocks(content: &str) -> impl Iterator<Item = &str> {
    content.trim().split(DELIMITER)
}

/// The five positional pattern rules, compiled once and applied per block.
pub struct BlockPatterns {
    /// Line 0: state token up to ` | `, then the digits after `h =`.
    initial_state: Regex,
    /// Line 1: decimal number followed by the word `seconds`.
    time: Regex,
    /// Line 2: integer after `Nodes expanded:`.
    nodes: Regex,
    /// Line 3: integer after `Solution length:`.
    length: Regex,
    /// Line 4: integer after `Total cost:`.
    cost: Regex,
}

impl BlockPatterns {
    pub fn new() -> Self {
        // Fixed literal patterns; compilation cannot fail at runtime.
        let compile = |pattern| Regex::new(pattern).expect("fixed pattern compiles");
        Self {
            initial_state: compile(r"Initial State:\s+(.+?)\s+\|\s+h\s+=\s+(\d+)"),
            time: compile(r"([0-9.]+)\s+seconds"),
            nodes: compile(r"Nodes expanded:\s+(\d+)"),
            length: compile(r"Solution length:\s+(\d+)"),
            cost: compile(r"Total cost:\s+(\d+)"),
        }
    }

    /// Apply the five rules to one raw block.
    ///
    /// `None` rejects the block whole: too few lines, a pattern that does not
    /// match its line, or a captured token that does not parse as its field
    /// type (the time pattern can capture strings like `1.2.3` that are not
    /// valid floats).
    pub fn extract(&self, block: &str) -> Option<RunRecord> {
        let lines: Vec<&str> = block.trim().lines().collect();
        if lines.len() < MIN_BLOCK_LINES {
            return None;
        }

        let caps = self.initial_state.captures(lines[0])?;
        let initial_state = caps.get(1)?.as_str().trim().to_string();
        let h = caps.get(2)?.as_str().parse().ok()?;
        let time_s = capture_f64(&self.time, lines[1])?;
        let nodes_expanded = capture_u64(&self.nodes, lines[2])?;
        let solution_length = capture_u64(&self.length, lines[3])?;
        let total_cost = capture_u64(&self.cost, lines[4])?;

        Some(RunRecord {
            initial_state,
            h,
            time_s,
            nodes_expanded,
            solution_length,
            total_cost,
        })
    }
}

impl Default for BlockPatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn capture_u64(re: &Regex, line: &str) -> Option<u64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

fn capture_f64(re: &Regex, line: &str) -> Option<f64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

/// Result of extracting one log: accepted records in input order, plus the
/// count of non-empty blocks that were rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSummary {
    pub records: Vec<RunRecord>,
    pub skipped: usize,
}

/// Extract every well-formed run block from log content.
///
/// Empty fragments (delimiters at the start or end of the file, or doubled
/// delimiters) are not counted as skipped; only a non-empty block that fails
/// extraction increments `skipped`.
pub fn extract_content(content: &str) -> ExtractSummary {
    let patterns = BlockPatterns::new();
    let mut records = Vec::new();
    let mut skipped = 0;

    for block in split_blocks(content) {
        if block.trim().is_empty() {
            continue;
        }
        match patterns.extract(block) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    ExtractSummary { records, skipped }
}

/// Read a log file, extract its runs, and write them as CSV.
///
/// Returns the extraction summary on success. The input is read whole before
/// processing begins; the output file is overwritten if it exists.
pub fn extract_file(input: &Path, output: &Path) -> Result<ExtractSummary, ExtractError> {
    let content = fs::read_to_string(input).map_err(|source| ExtractError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let summary = extract_content(&content);
    write_csv(&summary.records, output)?;
    Ok(summary)
}
