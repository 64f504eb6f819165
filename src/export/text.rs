//! Flat text plan export
//!
//! The format is consumed by external tooling, so the field order and labels
//! are fixed: a header line with the traveler's name, one block per stop
//! (1-based number, name, country, base cost), and a trailing summary block
//! with budget, total cost, and remaining budget.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::error::{TripError, TripResult};
use crate::models::{Itinerary, Money};

/// Write the plan in the flat text format
///
/// # Errors
///
/// `NoBudgetSet` when the itinerary has no ledger yet; `Write` on I/O
/// failure.
pub fn write_plan<W: Write>(itinerary: &Itinerary, writer: &mut W) -> TripResult<()> {
    let ledger = itinerary.ledger().ok_or(TripError::NoBudgetSet)?;

    let write_err = |e: std::io::Error| TripError::Write(e.to_string());

    writeln!(writer, "TRAVEL PLAN FOR: {}", itinerary.traveler_name()).map_err(write_err)?;
    writeln!(writer, "==================================================").map_err(write_err)?;
    writeln!(writer).map_err(write_err)?;

    for (i, stop) in itinerary.selected().iter().enumerate() {
        writeln!(writer, "Stop {}: {}, {}", i + 1, stop.name, stop.country).map_err(write_err)?;
        writeln!(writer, "Cost: {}", stop.base_cost).map_err(write_err)?;
        writeln!(writer).map_err(write_err)?;
    }

    writeln!(writer, "Total Budget: {}", ledger.budget()).map_err(write_err)?;
    writeln!(writer, "Total Cost: {}", ledger.total_cost()).map_err(write_err)?;
    writeln!(writer, "Remaining: {}", ledger.remaining()).map_err(write_err)?;

    Ok(())
}

/// Write the plan to a file path
pub fn export_plan_to_path<P: AsRef<Path>>(itinerary: &Itinerary, path: P) -> TripResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| TripError::Write(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    write_plan(itinerary, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TripError::Write(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Parse the stop section of an exported plan back into
/// (name, country, base cost) triples, in stop order
///
/// # Errors
///
/// `Read` when a stop block is malformed.
pub fn parse_stops<R: BufRead>(reader: R) -> TripResult<Vec<(String, String, Money)>> {
    let mut stops = Vec::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next() {
        let line = line.map_err(|e| TripError::Read(e.to_string()))?;

        if !line.starts_with("Stop ") {
            continue;
        }
        let Some((_, rest)) = line.split_once(": ") else {
            continue;
        };

        let (name, country) = rest
            .split_once(", ")
            .ok_or_else(|| TripError::Read(format!("Malformed stop line: '{}'", line)))?;

        let cost_line = lines
            .next()
            .transpose()
            .map_err(|e| TripError::Read(e.to_string()))?
            .ok_or_else(|| TripError::Read(format!("Missing cost line after '{}'", line)))?;

        let cost_text = cost_line
            .strip_prefix("Cost: ")
            .ok_or_else(|| TripError::Read(format!("Malformed cost line: '{}'", cost_line)))?;

        let cost = Money::parse(cost_text)
            .map_err(|e| TripError::Read(format!("Malformed cost line: {}", e)))?;

        stops.push((name.to_string(), country.to_string(), cost));
    }

    Ok(stops)
}
