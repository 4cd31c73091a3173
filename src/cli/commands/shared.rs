//! Shared components for CLI commands

use crate::cli::args::GlobalArgs;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// What a command decoded, for the final report
#[derive(Debug, Clone, Default, Serialize)]
pub struct DecodeSummary {
    /// Number of files decoded
    pub files_decoded: usize,
    /// Number of records decoded across all files
    pub records_decoded: usize,
    /// Wall time spent decoding
    pub elapsed: Duration,
}

impl DecodeSummary {
    /// Fold another file's summary into this one
    pub fn absorb(&mut self, other: &DecodeSummary) {
        self.files_decoded += other.files_decoded;
        self.records_decoded += other.records_decoded;
        self.elapsed += other.elapsed;
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level derived from the verbosity flags.
pub fn setup_logging(args: &GlobalArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("newave_decoder={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar for multi-file runs
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a serializable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_absorb() {
        let mut total = DecodeSummary::default();
        total.absorb(&DecodeSummary {
            files_decoded: 1,
            records_decoded: 320,
            elapsed: Duration::from_millis(5),
        });
        total.absorb(&DecodeSummary {
            files_decoded: 1,
            records_decoded: 12,
            elapsed: Duration::from_millis(2),
        });

        assert_eq!(total.files_decoded, 2);
        assert_eq!(total.records_decoded, 332);
        assert_eq!(total.elapsed, Duration::from_millis(7));
    }
}
