//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Stopboard command-line interface for arranging stops into groups
#[derive(Parser)]
#[command(name = "stopboard-cli")]
#[command(author, version, about = "Stopboard command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print a freshly seeded board
    #[command(about = "Load a seed and print the board")]
    Show {
        /// Seed file (JSON or TOML); the built-in demo data when omitted
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Include private groups
        #[arg(long)]
        show_private: bool,

        /// Only list pool stops tagged with this division
        #[arg(short, long)]
        division: Option<u32>,
    },

    /// Replay a script of board events
    #[command(about = "Replay a JSON script of board events and print the result")]
    Run {
        /// Script file: a JSON array of events
        script: PathBuf,

        /// Seed file (JSON or TOML); the built-in demo data when omitted
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Use predictable sequential uids regardless of settings
        #[arg(long)]
        sequential: bool,
    },

    /// Load the demo data through the simulated async fetch
    #[command(about = "Fetch the demo seed with a simulated delay and print the board")]
    Demo {
        /// Simulated fetch delay in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    #[default]
    Table,
    /// Output as JSON
    Json,
}
