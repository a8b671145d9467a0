//! Command implementations for the school explorer CLI
//!
//! Each subcommand is implemented in its own module; this module holds the
//! dispatcher. Dataset loading and logging setup shared by the commands
//! live in `shared`.

pub mod counts;
pub mod search;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the school explorer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `counts`: aggregate classification and registry count reports
/// - `search`: interactive (or one-shot) phrase search
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Counts(counts_args) => counts::run_counts(counts_args),
        Commands::Search(search_args) => search::run_search(search_args),
    }
}
