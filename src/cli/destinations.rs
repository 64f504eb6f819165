//! Destination catalog CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::catalog::{import_from_path, DestinationCatalog};
use crate::display::{format_destination_details, format_destination_list};
use crate::error::TripResult;

/// Destination catalog subcommands
#[derive(Subcommand)]
pub enum DestinationCommands {
    /// List all available destinations
    List {
        /// Import additional destinations from a comma-separated file first
        #[arg(short, long)]
        import: Option<PathBuf>,
    },
    /// Show one destination's details
    Show {
        /// Destination number as shown in the listing (1-based)
        number: i64,
    },
}

/// Handle a destination command
pub fn handle_destination_command(
    catalog: &mut DestinationCatalog,
    cmd: DestinationCommands,
) -> TripResult<()> {
    match cmd {
        DestinationCommands::List { import } => {
            if let Some(path) = import {
                let count = import_from_path(catalog, &path)?;
                println!("Loaded {} destinations from {}", count, path.display());
                println!();
            }
            print!("{}", format_destination_list(catalog.all()));
        }

        DestinationCommands::Show { number } => {
            let destination = catalog.get(number - 1)?;
            print!("{}", format_destination_details(destination));
        }
    }

    Ok(())
}
