//! Inspect command: decode several files chosen by file name

use super::cuts::CutsReport;
use super::hydro::HydroReport;
use super::shared::{DecodeSummary, create_progress_bar, print_json};
use crate::app::adapters::filesystem::LocalFileSystem;
use crate::app::services::cut_chains::ChainHeads;
use crate::app::services::format_registry::{DecodedFile, FormatRegistry, dispatch};
use crate::cli::args::{GlobalArgs, InspectArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Report for one inspected file
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum InspectReport {
    HydroRegistry(HydroReport),
    CutPool(CutsReport),
}

/// Inspect command runner
///
/// Files are decoded in the order given; the first failure stops the run.
pub fn run_inspect(args: &InspectArgs, global: &GlobalArgs) -> Result<DecodeSummary> {
    let start_time = Instant::now();
    let registry = FormatRegistry::standard()?;
    let config = global.decoder_config();

    let progress = (global.show_progress() && args.files.len() > 1)
        .then(|| create_progress_bar(args.files.len() as u64, "Decoding files"));

    let mut summary = DecodeSummary::default();
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        if let Some(pb) = &progress {
            pb.set_message(path.display().to_string());
        }

        let decoded = dispatch(&registry, &LocalFileSystem, path, &config, ChainHeads::Absent)
            .with_context(|| format!("Failed to inspect {}", path.display()))?;

        let report = match &decoded {
            DecodedFile::HydroRegistry(plants) => {
                summary.records_decoded += plants.len();
                InspectReport::HydroRegistry(HydroReport::build(plants, path, false))
            }
            DecodedFile::CutPool(cuts) => {
                summary.records_decoded += cuts.len();
                InspectReport::CutPool(CutsReport::build(cuts, path))
            }
        };
        summary.files_decoded += 1;
        reports.push(report);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    match global.output_format {
        OutputFormat::Human => {
            for report in &reports {
                match report {
                    InspectReport::HydroRegistry(hydro) => hydro.print_human(),
                    InspectReport::CutPool(cuts) => cuts.print_human(),
                }
                println!();
            }
            println!(
                "{} {} files, {} records",
                "Decoded".bright_green().bold(),
                summary.files_decoded,
                summary.records_decoded
            );
        }
        OutputFormat::Json => print_json(&reports)?,
    }

    summary.elapsed = start_time.elapsed();
    info!(
        "Inspected {} files in {:.2?}",
        summary.files_decoded, summary.elapsed
    );
    Ok(summary)
}
