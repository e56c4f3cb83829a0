//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for inorbit
#[derive(Parser, Debug)]
#[command(name = "inorbit")]
#[command(author, version, about = "in.orbit - weekly habit goals")]
#[command(long_about = r#"
in.orbit keeps track of the activities you want to practise every week.

Run the API server (PostgreSQL required, see DATABASE_URL):
  inorbit serve

Register a goal against a running server:
  inorbit create --title "Meditar" --frequency 3

Configuration files are loaded from (in priority order):
1. DATABASE_URL / INORBIT_* environment variables
2. --config <path>     Explicit config file
3. ./inorbit.toml      Project-level config
4. ~/.config/inorbit/config.toml   Global config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Skip applying database migrations on start-up
        #[arg(long)]
        no_migrate: bool,
    },

    /// Apply database migrations and exit
    Migrate,

    /// Submit a new goal to a running server
    Create {
        /// The activity to practise
        #[arg(short, long, default_value = "")]
        title: String,

        /// Times per week, 1 to 7
        #[arg(short, long, default_value = "5")]
        frequency: String,

        /// Base URL of the API (overrides config)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },

    /// List the weekly frequency options
    Frequencies,
}
