//! Search command implementation
//!
//! Loads the dataset, builds the search engine once, and either answers a
//! single `--query` or enters an interactive prompt loop. Results are
//! printed as a zero-indexed list.

use crate::cli::args::SearchArgs;
use crate::cli::commands::shared;
use crate::cli::input;
use crate::constants::QUIT_TOKEN;
use crate::{Result, SearchEngine};
use colored::Colorize;
use tracing::info;

/// Execute the search command
pub fn run_search(args: SearchArgs) -> Result<()> {
    args.data.validate()?;
    shared::setup_logging(&args.data)?;

    let (dataset, _stats) = shared::load_dataset(&args.data)?;

    println!("Initializing search...");
    let engine = SearchEngine::new(dataset.schools());

    if let Some(query) = &args.query {
        print_results(&engine.phrase(query));
        return Ok(());
    }

    run_interactive(&engine)
}

/// Prompt loop: one query per line until the quit token or end of input
fn run_interactive(engine: &SearchEngine) -> Result<()> {
    println!(
        "Search started. Type `{}` to quit. Search is not case-sensitive. \
         Incorrect spelling will not be adjusted.",
        QUIT_TOKEN.to_uppercase()
    );

    loop {
        let Some(line) = input::read_line("Enter search term: ")? else {
            // End of input stream
            info!("Exiting...");
            break;
        };

        let response = line.trim().to_lowercase();
        if response.is_empty() {
            continue;
        }
        if response == QUIT_TOKEN {
            break;
        }

        print_results(&engine.phrase(&response));
    }

    Ok(())
}

fn print_results(results: &[String]) {
    if results.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }
    for (i, result) in results.iter().enumerate() {
        println!("{}: {}", i, result);
    }
}
