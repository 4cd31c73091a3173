//! Text file loading for the fixed-column decoders

use crate::app::adapters::filesystem::FileSource;
use crate::config::TextEncoding;
use crate::Result;
use std::path::Path;
use tracing::warn;

/// Read a whole text file and decode it with `encoding`
///
/// Single-byte decoding cannot fail; invalid UTF-8 sequences are replaced and logged.
pub fn read_text(source: &impl FileSource, path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = source.read_bytes(path)?;
    let (text, had_errors) = encoding.decode(&bytes);

    if had_errors {
        warn!(
            "Replaced invalid {:?} sequences while reading {}",
            encoding,
            path.display()
        );
    }

    Ok(text.into_owned())
}
