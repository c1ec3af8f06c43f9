//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, CounterArgs};
pub use output::{format_dashboard, format_totals, TerminalPresenter};
