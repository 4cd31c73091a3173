//! Filename-based dispatch to the binary decoders
//!
//! The caller builds a [`FormatRegistry`] mapping file-name patterns to formats
//! and passes it to [`dispatch`]. Formats are never sniffed from file content.

use crate::app::adapters::filesystem::FileSource;
use crate::app::services::cut_chains::{ChainHeads, CutChainDecoder, FCFCutsCollection};
use crate::app::services::hydro_registry::{HydroRegistry, HydroRegistryDecoder};
use crate::config::DecoderConfig;
use crate::constants::{cuts, hydro};
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A decodable file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Hydro plant registry (HIDR.DAT)
    HydroRegistry,
    /// Future cost function cut pool (cortes.dat)
    CutPool,
}

impl FileFormat {
    /// Record width in bytes
    pub fn record_size(&self) -> usize {
        match self {
            FileFormat::HydroRegistry => hydro::RECORD_SIZE,
            FileFormat::CutPool => cuts::RECORD_SIZE,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::HydroRegistry => write!(f, "hydro registry"),
            FileFormat::CutPool => write!(f, "cut pool"),
        }
    }
}

/// Ordered file-name patterns; the first match wins
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    entries: Vec<(Regex, FileFormat)>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern matched against the bare file name
    pub fn register(&mut self, pattern: &str, format: FileFormat) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::configuration(format!("invalid file-name pattern '{}': {}", pattern, e))
        })?;
        self.entries.push((regex, format));
        Ok(())
    }

    /// Builder variant of [`register`](Self::register)
    pub fn with_format(mut self, pattern: &str, format: FileFormat) -> Result<Self> {
        self.register(pattern, format)?;
        Ok(self)
    }

    /// The conventional file names of the planning model, case-insensitive
    pub fn standard() -> Result<Self> {
        Self::new()
            .with_format(r"(?i)^hidr\.dat$", FileFormat::HydroRegistry)?
            .with_format(r"(?i)^cortes(\d+)?\.dat$", FileFormat::CutPool)
    }

    /// Format registered for a path's file name
    pub fn format_for(&self, path: &Path) -> Option<FileFormat> {
        let file_name = path.file_name()?.to_str()?;
        self.entries
            .iter()
            .find(|(regex, _)| regex.is_match(file_name))
            .map(|(_, format)| *format)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of decoding a dispatched file
#[derive(Debug, Clone)]
pub enum DecodedFile {
    HydroRegistry(HydroRegistry),
    CutPool(FCFCutsCollection),
}

impl DecodedFile {
    pub fn format(&self) -> FileFormat {
        match self {
            DecodedFile::HydroRegistry(_) => FileFormat::HydroRegistry,
            DecodedFile::CutPool(_) => FileFormat::CutPool,
        }
    }
}

/// Decode a file with the decoder its name maps to
///
/// `heads` is only consulted for cut pools.
pub fn dispatch(
    registry: &FormatRegistry,
    source: &impl FileSource,
    path: &Path,
    config: &DecoderConfig,
    heads: ChainHeads<'_>,
) -> Result<DecodedFile> {
    let format = registry.format_for(path).ok_or_else(|| {
        Error::unknown_format(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        )
    })?;

    debug!("Dispatching {} as {}", path.display(), format);

    match format {
        FileFormat::HydroRegistry => {
            let decoder = HydroRegistryDecoder::new(config.clone())?;
            decoder.load(source, path).map(DecodedFile::HydroRegistry)
        }
        FileFormat::CutPool => {
            let decoder = CutChainDecoder::new(config.clone())?;
            decoder
                .decode_file_from(source, path, heads)
                .map(DecodedFile::CutPool)
        }
    }
}
