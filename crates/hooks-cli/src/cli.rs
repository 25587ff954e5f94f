//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hooks_meta::DEFAULT_CONFIG_FILE;

/// Check and inspect pre-commit hook configuration
#[derive(Parser, Debug)]
#[command(name = "hookcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the hook configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "HOOKCFG_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate the configuration, reporting every problem
    Check,

    /// List hooks in the order a runner executes them
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration in normalized form
    ///
    /// Examples:
    ///   hookcfg fmt            # Print to stdout
    ///   hookcfg fmt --write    # Rewrite the file in place
    Fmt {
        /// Write the normalized document back to the config file
        #[arg(long)]
        write: bool,
    },
}
