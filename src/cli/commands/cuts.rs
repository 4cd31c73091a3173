//! Cuts command: chain reconstruction and statistics for a cut pool

use super::shared::{DecodeSummary, print_json};
use crate::app::adapters::filesystem::LocalFileSystem;
use crate::app::services::cut_chains::{
    ChainHeads, CutChainDecoder, CutStatistics, FCFCutsCollection, HeadSource,
};
use crate::cli::args::{CutsArgs, GlobalArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Cut pool summary printed by the cuts and inspect commands
#[derive(Debug, Clone, Serialize)]
pub struct CutsReport {
    pub file: PathBuf,
    pub head_source: HeadSource,
    pub statistics: CutStatistics,
    pub chains: Vec<ChainSummary>,
}

/// One line of the chain listing
#[derive(Debug, Clone, Serialize)]
pub struct ChainSummary {
    pub head: usize,
    pub owner: u8,
    pub iteration: u16,
    pub length: usize,
    pub active: usize,
}

impl CutsReport {
    pub fn build(collection: &FCFCutsCollection, file: &Path) -> Self {
        let chains = collection
            .chains()
            .iter()
            .map(|chain| ChainSummary {
                head: chain.head,
                owner: chain.owner,
                iteration: chain.iteration,
                length: chain.len(),
                active: collection.chain_cuts(chain).filter(|cut| cut.active).count(),
            })
            .collect();

        Self {
            file: file.to_path_buf(),
            head_source: collection.head_source(),
            statistics: collection.cut_statistics(),
            chains,
        }
    }

    pub fn print_human(&self) {
        let stats = &self.statistics;

        println!("{} {}", "Cut pool".bright_green().bold(), self.file.display());
        println!(
            "  {} cuts in {} chains, {} active ({:.1}%)",
            stats.cut_count.to_string().bold(),
            stats.chain_count.to_string().bold(),
            stats.active_count,
            stats.active_rate()
        );
        if self.head_source == HeadSource::Unreferenced {
            println!(
                "  {}",
                "chain heads inferred from unreferenced records".yellow()
            );
        }
        if stats.unchained_count > 0 {
            println!("  {} records outside every chain", stats.unchained_count);
        }
        if let (Some(min), Some(max)) = (stats.min_intercept, stats.max_intercept) {
            println!("  intercept range: [{:.4}, {:.4}]", min, max);
        }
        println!(
            "  coefficient magnitude: max {:.6}, mean {:.6}",
            stats.max_abs_coefficient, stats.mean_abs_coefficient
        );
        println!();
        println!(
            "  {:>6} {:>6} {:>9} {:>7} {:>7}",
            "Head", "Owner", "Iteration", "Cuts", "Active"
        );
        for chain in &self.chains {
            println!(
                "  {:>6} {:>6} {:>9} {:>7} {:>7}",
                chain.head, chain.owner, chain.iteration, chain.length, chain.active
            );
        }
    }
}

/// Cuts command runner
pub fn run_cuts(args: &CutsArgs, global: &GlobalArgs) -> Result<DecodeSummary> {
    let start_time = Instant::now();
    info!("Decoding cut pool {}", args.file.display());

    let config = args.decoder_config(global.decoder_config())?;
    let decoder = CutChainDecoder::new(config)?;
    let heads = ChainHeads::from(args.heads.as_ref().map(|list| list.positions.as_slice()));

    let collection = decoder
        .decode_file_from(&LocalFileSystem, &args.file, heads)
        .with_context(|| format!("Failed to decode cut pool {}", args.file.display()))?;

    let report = CutsReport::build(&collection, &args.file);
    match global.output_format {
        OutputFormat::Human => report.print_human(),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(DecodeSummary {
        files_decoded: 1,
        records_decoded: collection.len(),
        elapsed: start_time.elapsed(),
    })
}
