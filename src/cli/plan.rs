//! Interactive planning session
//!
//! Drives the menu loop: greet, collect traveler name and budget, then
//! process one command at a time until the user quits. All recoverable
//! errors are rendered as one-line messages here and the loop continues;
//! the core model never touches the console.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::catalog::{import_from_path, DestinationCatalog};
use crate::config::Settings;
use crate::display::{format_destination_list, format_plan};
use crate::error::{TripError, TripResult};
use crate::export::{export_plan_json_to_path, export_plan_to_path};
use crate::models::{Itinerary, Money};

/// Arguments for the interactive planning session
#[derive(Args, Default)]
pub struct PlanArgs {
    /// Traveler name (prompted when omitted)
    #[arg(short, long, env = "TRIPPLAN_TRAVELER")]
    pub name: Option<String>,

    /// Trip budget, e.g. "1000" or "1000.50" (prompted when omitted)
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Import additional destinations from a comma-separated file
    #[arg(short, long)]
    pub import: Option<PathBuf>,
}

/// Run the interactive planning session
pub fn run_plan_session(args: PlanArgs, settings: &Settings) -> TripResult<()> {
    println!();
    println!("========================================");
    println!("   TRAVEL PLANNER");
    println!("========================================");
    println!();

    let mut catalog = DestinationCatalog::with_defaults();
    if let Some(path) = &args.import {
        match import_from_path(&mut catalog, path) {
            Ok(count) => println!("Loaded {} destinations from {}", count, path.display()),
            Err(e) => println!("Error: {}", e),
        }
    }

    let traveler = match args.name {
        Some(name) => name,
        None => prompt("Enter your name: ")?.unwrap_or_default(),
    };

    let mut itinerary = Itinerary::new(traveler);
    set_budget_interactive(&mut itinerary, args.budget)?;

    loop {
        println!();
        println!("--- MENU ---");
        println!("1. View all destinations");
        println!("2. Add destination to plan");
        println!("3. View my travel plan");
        println!("4. Save plan to file");
        println!("5. Exit");

        let Some(choice) = prompt("Choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => print!("\n{}", format_destination_list(catalog.all())),

            "2" => {
                if let Err(e) = add_destination_command(&catalog, &mut itinerary, settings) {
                    println!("Error: {}", e);
                }
            }

            "3" => print!("\n{}", format_plan(&itinerary)),

            "4" => {
                if let Err(e) = save_command(&itinerary, settings) {
                    println!("Error: {}", e);
                }
            }

            "5" => break,

            _ => println!("Invalid choice. Try again."),
        }
    }

    println!();
    println!("Happy travels! Goodbye!");
    Ok(())
}

/// Create the ledger, re-prompting until the budget is valid
///
/// A budget supplied via `--budget` is not re-prompted: a bad value aborts
/// session setup instead.
fn set_budget_interactive(itinerary: &mut Itinerary, flag: Option<String>) -> TripResult<()> {
    if let Some(text) = flag {
        let budget = parse_amount(&text)?;
        return itinerary.set_budget(budget);
    }

    loop {
        let Some(input) = prompt("Enter your budget ($): ")? else {
            return Err(TripError::Io("End of input while reading budget".into()));
        };

        let result = parse_amount(&input).and_then(|budget| itinerary.set_budget(budget));
        match result {
            Ok(()) => return Ok(()),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Menu option 2: pick a destination by its 1-based number
fn add_destination_command(
    catalog: &DestinationCatalog,
    itinerary: &mut Itinerary,
    settings: &Settings,
) -> TripResult<()> {
    print!("\n{}", format_destination_list(catalog.all()));

    let Some(input) = prompt("Enter destination number: ")? else {
        return Ok(());
    };
    let number: i64 = input
        .parse()
        .map_err(|_| TripError::Validation(format!("'{}' is not a number", input)))?;

    let destination = catalog.get(number - 1)?.clone();
    let name = destination.name.clone();
    itinerary.add_destination(destination)?;
    println!("Added {} to your plan!", name);

    if settings.warn_over_budget {
        if let Some(ledger) = itinerary.ledger() {
            if !ledger.within_budget() {
                println!("Warning: over budget by {}!", ledger.remaining().abs());
            }
        }
    }

    Ok(())
}

/// Menu option 4: export the plan to a text (or JSON) file
fn save_command(itinerary: &Itinerary, settings: &Settings) -> TripResult<()> {
    let preset = &settings.default_export_file;
    let input = prompt(&format!("Enter filename [{}]: ", preset))?.unwrap_or_default();
    let filename = if input.is_empty() { preset.clone() } else { input };

    if filename.ends_with(".json") {
        export_plan_json_to_path(itinerary, &filename)?;
    } else {
        export_plan_to_path(itinerary, &filename)?;
    }

    println!("Travel plan saved to {}", filename);
    Ok(())
}

fn parse_amount(text: &str) -> TripResult<Money> {
    Money::parse(text)
        .map_err(|_| TripError::Validation(format!("'{}' is not a valid amount", text)))
}

/// Prompt for one line of input; `None` on end of input
fn prompt(message: &str) -> TripResult<Option<String>> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| TripError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| TripError::Io(e.to_string()))?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
