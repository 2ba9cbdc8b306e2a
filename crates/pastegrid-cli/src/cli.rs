//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pastegrid: pasted tables to typed JSON
#[derive(Parser)]
#[command(name = "pastegrid")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a paste and print the typed table as JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the detected format and the column types of a paste
    Schema {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Where the paste comes from and how to read it.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to the paste (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Numeric locale, written as a sample number (e.g. "10.000,00")
    #[arg(short, long, default_value = "10,000.00", conflicts_with = "no_locale")]
    pub locale: String,

    /// Run without a numeric locale
    #[arg(long)]
    pub no_locale: bool,

    /// Naming convention for headers (default, snake_case, PascalCase, camelCase, r, python, julia)
    #[arg(short, long, default_value = "default")]
    pub convention: String,
}
