//! Display formatting for terminal output
//!
//! Formats catalog and plan data for the terminal. Formatters build strings
//! and hold no console state; printing is left to the caller.

pub mod destination;
pub mod plan;

pub use destination::{format_destination_details, format_destination_list};
pub use plan::{format_cost_breakdown, format_plan};
