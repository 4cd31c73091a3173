use clap::Parser;
use newave_decoder::cli::{args::Args, commands};
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
        Ok(_summary) => {
            // Success - the command has already printed its report
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NEWAVE Decoder - planning case record decoder");
    println!("=============================================");
    println!();
    println!("Decode the hydro plant registry and future cost function cut pool");
    println!("of a NEWAVE planning case, validating every record.");
    println!();
    println!("USAGE:");
    println!("    newave-decode <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    hydro       Decode a hydro plant registry file (HIDR.DAT)");
    println!("    cuts        Decode a cut pool file (cortes.dat) and rebuild its chains");
    println!("    inspect     Decode several files chosen by file name");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -f, --format <human|json>    Output format");
    println!("        --encoding <latin1|cp1252|utf8> Encoding of string fields");
    println!("    -v, --verbose                Increase logging verbosity");
    println!("    -q, --quiet                  Only show errors");
    println!();
    println!("EXAMPLES:");
    println!("    newave-decode hydro deck/HIDR.DAT");
    println!("    newave-decode cuts deck/cortes.dat --heads 0,4,9 --format json");
    println!("    newave-decode inspect deck/HIDR.DAT deck/cortes.dat");
}
