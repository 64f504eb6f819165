use anyhow::Result;
use clap::{Parser, Subcommand};

use tripplan::catalog::DestinationCatalog;
use tripplan::cli::{handle_destination_command, run_plan_session, DestinationCommands, PlanArgs};
use tripplan::config::{paths::TripPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "tripplan",
    version,
    about = "Terminal-based travel itinerary planning application",
    long_about = "tripplan is a terminal-based travel planner. Pick destinations \
                  from the catalog, build an itinerary, track the running cost \
                  against your budget, and export the plan to a file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive planning session
    Plan(PlanArgs),

    /// Destination catalog commands
    #[command(subcommand, alias = "dest")]
    Destinations(DestinationCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TripPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Plan(args)) => {
            run_plan_session(args, &settings)?;
        }
        Some(Commands::Destinations(cmd)) => {
            let mut catalog = DestinationCatalog::with_defaults();
            handle_destination_command(&mut catalog, cmd)?;
        }
        Some(Commands::Config) => {
            println!("tripplan Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default export file: {}", settings.default_export_file);
            println!("  Warn over budget:    {}", settings.warn_over_budget);
        }
        None => {
            run_plan_session(PlanArgs::default(), &settings)?;
        }
    }

    Ok(())
}
