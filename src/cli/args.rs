//! Command-line argument definitions for the decoder front end
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{DecoderConfig, TextEncoding};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the planning model record decoder
///
/// Decodes the hydro plant registry and the future cost function cut pool of a
/// planning case and prints what they contain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "newave-decode",
    version,
    about = "Decode hydro registry and cut pool files of a NEWAVE planning case",
    long_about = "Decodes the fixed-width binary record files of a NEWAVE planning case into typed \
                  records, validating every field and reporting the exact record and byte offset \
                  of any inconsistency. Files are decoded one at a time; directories are not walked."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct GlobalArgs {
    /// Output format for decoded summaries
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human,
        global = true,
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Encoding of fixed-width string fields
    #[arg(
        long = "encoding",
        value_enum,
        default_value_t = EncodingArg::Latin1,
        global = true,
        help = "Encoding of fixed-width string fields"
    )]
    pub encoding: EncodingArg,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", global = true, help = "Only show errors")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode a hydro plant registry file (HIDR.DAT)
    Hydro(HydroArgs),
    /// Decode a cut pool file (cortes.dat) and rebuild its chains
    Cuts(CutsArgs),
    /// Decode files by name using the standard file-name patterns
    Inspect(InspectArgs),
}

/// Arguments for the hydro command
#[derive(Debug, Clone, Parser)]
pub struct HydroArgs {
    /// Registry file to decode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Include blank registry slots in the listing
    #[arg(long = "all", help = "List blank slots too")]
    pub include_blank: bool,
}

/// Arguments for the cuts command
#[derive(Debug, Clone, Parser)]
pub struct CutsArgs {
    /// Cut pool file to decode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Chain heads as record positions
    ///
    /// When omitted, every record no other record points at is used as a chain
    /// head and a warning is logged.
    #[arg(
        long = "heads",
        value_name = "LIST",
        help = "Comma-separated chain-head record positions"
    )]
    pub heads: Option<HeadList>,

    /// Refuse to decode without a chain-head list
    #[arg(long = "require-heads", help = "Fail when --heads is not given")]
    pub require_heads: bool,

    /// Next-index value that ends a chain (0 or negative)
    #[arg(
        long = "terminator",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Chain terminator sentinel"
    )]
    pub terminator: Option<i32>,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Files to decode
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// String encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Latin1,
    #[value(name = "cp1252")]
    Windows1252,
    Utf8,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin1 => TextEncoding::Latin1,
            EncodingArg::Windows1252 => TextEncoding::Windows1252,
            EncodingArg::Utf8 => TextEncoding::Utf8,
        }
    }
}

/// Comma-separated list of record positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadList {
    pub positions: Vec<usize>,
}

impl FromStr for HeadList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let positions = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>().map_err(|_| {
                    Error::configuration(format!("invalid chain-head position '{}'", part))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if positions.is_empty() {
            return Err(Error::configuration("chain-head list is empty"));
        }

        Ok(Self { positions })
    }
}

impl GlobalArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Decoder configuration shared by every command
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::default().with_text_encoding(self.encoding.into())
    }
}

impl CutsArgs {
    /// Decoder configuration for the cut pool, validated
    pub fn decoder_config(&self, base: DecoderConfig) -> Result<DecoderConfig> {
        let mut config = base;
        if let Some(terminator) = self.terminator {
            config = config.with_terminator(terminator);
        }
        if self.require_heads {
            config = config.requiring_head_index();
        }
        config.validate()?;
        Ok(config)
    }
}
