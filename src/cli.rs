//! CLI argument parsing using clap v4

use clap::{Args, Parser, Subcommand};

/// Course Registration - register students for courses
///
/// Runs an interactive menu for registering students, reviewing the current
/// roster and saving it to a JSON file. With no subcommand the interactive
/// session starts.
#[derive(Parser, Debug)]
#[command(name = "course-registration")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by commands that open the roster
#[derive(Args, Debug, Clone)]
pub struct RosterArgs {
    /// Path to configuration file
    #[arg(short, long, env = "COURSE_REG_CONFIG")]
    pub config: Option<String>,

    /// Roster file (overrides the configured storage file)
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive registration menu (default)
    Run(RosterArgs),

    /// Print the stored roster and exit
    Show(RosterArgs),

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
