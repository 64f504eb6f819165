//! JSON plan export
//!
//! Writes the full plan snapshot (id, traveler, stops, ledger) as pretty
//! JSON for downstream tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TripError, TripResult};
use crate::models::Itinerary;

/// Write the plan snapshot as pretty JSON
///
/// # Errors
///
/// `NoBudgetSet` when the itinerary has no ledger yet; `Json` on
/// serialization failure.
pub fn write_plan_json<W: Write>(itinerary: &Itinerary, writer: &mut W) -> TripResult<()> {
    let snapshot = itinerary.snapshot()?;
    serde_json::to_writer_pretty(writer, &snapshot)?;
    Ok(())
}

/// Write the plan snapshot to a file path
pub fn export_plan_json_to_path<P: AsRef<Path>>(itinerary: &Itinerary, path: P) -> TripResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| TripError::Write(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    write_plan_json(itinerary, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TripError::Write(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}
