use clap::Parser;
use school_explorer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("School Explorer - US Public School Directory Analysis");
    println!("=====================================================");
    println!();
    println!("Load a flat CSV file of US public school records and explore it with");
    println!("aggregate count reports and free-text phrase search.");
    println!();
    println!("USAGE:");
    println!("    school-explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    counts      Report classification and registry counts");
    println!("    search      Search school records by free-text phrase");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Report all counts for the default data file:");
    println!("    school-explorer counts");
    println!();
    println!("    # Report one category as JSON:");
    println!("    school-explorer counts --category state --format json");
    println!();
    println!("    # Interactive search over a custom file:");
    println!("    school-explorer search --input /path/to/schools.csv");
    println!();
    println!("    # One-shot search:");
    println!("    school-explorer search --query \"elementary springfield\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    school-explorer <COMMAND> --help");
}
