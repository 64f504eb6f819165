//! Plan export
//!
//! Serializes an itinerary plus its ledger snapshot to a file. The flat text
//! format is the primary surface; a JSON snapshot export is available for
//! tooling. The transformation is pure except for the final write.

pub mod json;
pub mod text;

pub use json::{export_plan_json_to_path, write_plan_json};
pub use text::{export_plan_to_path, parse_stops, write_plan};
