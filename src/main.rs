//! Course Registration - interactive student enrollment roster
//!
//! Loads the roster file at startup, then lets the user register students,
//! review the roster and save it back to disk from a numbered menu.

mod app;
mod cli;
mod config;
mod console;
mod error;
mod logging;
mod model;
mod store;
mod version;

use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::cli::{Cli, Commands, ConfigSubcommand, RosterArgs};
use crate::config::RegistryConfig;
use crate::console::Console;
use crate::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = match &cli.command {
        Some(Commands::Version) => {
            version::print_version();
            return Ok(());
        }
        Some(Commands::Config { subcommand }) => return handle_config_command(subcommand.clone()),
        Some(Commands::Run(args)) | Some(Commands::Show(args)) => args.clone(),
        None => RosterArgs {
            config: std::env::var("COURSE_REG_CONFIG").ok(),
            file: None,
        },
    };

    let config = load_config_or_exit(args.config.as_deref(), args.file.as_deref());

    // Held until exit so buffered file logs are flushed
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::BuildInfo::current();
    info!(
        version = %build.full_version(),
        roster = %config.storage.file,
        "Starting course registration"
    );

    let mut console = Console::stdio();
    match cli.command {
        Some(Commands::Show(_)) => {
            let students = store::load(config.roster_path(), Vec::new(), &mut console);
            console.display_roster(&students);
        }
        _ => App::new(console, config.roster_path()).run(),
    }

    Ok(())
}

/// Load configuration, printing the formatted error and exiting on failure
fn load_config_or_exit(config_path: Option<&str>, roster_file: Option<&str>) -> RegistryConfig {
    match RegistryConfig::load(config_path) {
        Ok(mut cfg) => {
            cfg.override_roster_file(roster_file);
            cfg
        }
        Err(e) => {
            eprint!("{}", e.format_for_terminal());
            std::process::exit(e.exit_code());
        }
    }
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = load_config_or_exit(config.as_deref(), None);
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => match config::init_config(path.as_deref(), force) {
            Ok(created) => println!("Configuration file created: {}", created.display()),
            Err(e) => {
                eprint!("{}", e.format_for_terminal());
                std::process::exit(e.exit_code());
            }
        },
        ConfigSubcommand::Validate { config } => {
            load_config_or_exit(config.as_deref(), None);
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
