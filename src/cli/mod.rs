//! CLI command handlers
//!
//! This module bridges clap argument parsing with the core model: the
//! non-interactive catalog commands and the interactive planning session.

pub mod destinations;
pub mod plan;

pub use destinations::{handle_destination_command, DestinationCommands};
pub use plan::{run_plan_session, PlanArgs};
