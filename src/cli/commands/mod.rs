//! Command implementations for the decoder CLI
//!
//! Each subcommand lives in its own module; [`run`] dispatches to them.

pub mod cuts;
pub mod hydro;
pub mod inspect;
pub mod shared;

pub use shared::DecodeSummary;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Installs logging, then dispatches to the subcommand handler:
/// - `hydro`: plant registry listing
/// - `cuts`: cut pool chains and statistics
/// - `inspect`: decode several files chosen by file name
pub fn run(args: Args) -> Result<DecodeSummary> {
    shared::setup_logging(&args.global)?;

    match args.command {
        Some(Commands::Hydro(hydro_args)) => hydro::run_hydro(&hydro_args, &args.global),
        Some(Commands::Cuts(cuts_args)) => cuts::run_cuts(&cuts_args, &args.global),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(&inspect_args, &args.global),
        None => Ok(DecodeSummary::default()),
    }
}
