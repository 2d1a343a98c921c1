//! CSV output for extracted run records.

use std::path::Path;

use crate::error::ExtractError;
use crate::record::RunRecord;

/// The fixed output header, matching `RunRecord` field order.
pub const HEADER: [&str; 6] = [
    "initial_state",
    "h",
    "time_s",
    "nodes_expanded",
    "solution_length",
    "total_cost",
];

/// Write records as CSV rows under the fixed header, in sequence order.
///
/// Overwrites the output file if it exists. The header is written even when
/// there are no records. Quoting follows standard CSV rules, so a state
/// token containing a comma or quote still produces a well-formed row.
pub fn write_csv(records: &[RunRecord], path: &Path) -> Result<(), ExtractError> {
    let wrap = |source| ExtractError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    // Header written explicitly so an empty record set still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;
    writer.write_record(HEADER).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(csv::Error::from(e)))?;
    Ok(())
}
