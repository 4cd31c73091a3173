//! File access for the decoders
//!
//! Reading a file is kept apart from decoding it: a missing or unreadable file is
//! reported as [`Error::FileNotFound`] or [`Error::Io`], never as a decode error.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of whole-file byte buffers
pub trait FileSource {
    /// Read the complete contents of `path`
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSource for LocalFileSystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::file_not_found(path))
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

/// In-memory file source, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the contents of a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    /// Builder variant of [`insert`](Self::insert)
    pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl FileSource for MemoryFileSource {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::file_not_found(path))
    }
}
