//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studylog")]
#[command(about = "Daily study log tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Counter fields accepted by `add` and `edit`. Values are coerced like form input.
#[derive(Args, Debug, Clone, Default)]
pub struct CounterArgs {
    /// Physics amount
    #[arg(long, value_name = "N")]
    pub physics: Option<String>,

    /// Chemistry amount
    #[arg(long, value_name = "N")]
    pub chemistry: Option<String>,

    /// Maths amount
    #[arg(long, value_name = "N")]
    pub maths: Option<String>,

    /// Number of mock exams
    #[arg(long, value_name = "N")]
    pub mocks: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new study log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show entries, totals and chart
    Show,

    /// Record the entry for a date, replacing any existing one
    Add {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        counters: CounterArgs,
    },

    /// Change fields of an existing entry
    Edit {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        counters: CounterArgs,
    },

    /// Delete the entry for a date
    Remove {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all saved entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write all entries as JSON
    Export {
        /// Output file, '-' for stdout (default: export_file from config)
        path: Option<PathBuf>,
    },

    /// Replace all entries with a JSON export
    Import {
        /// File produced by 'studylog export'
        path: PathBuf,
    },

    /// Print subject totals
    Totals,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
