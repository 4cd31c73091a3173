//! Whole-file reading of fixed-width binary records

use crate::app::adapters::filesystem::{FileSource, LocalFileSystem};
use crate::error::{DecodeError, DecodeResult};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One record of a [`RecordSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// 0-based position in the file
    pub index: usize,
    /// Absolute byte offset of the record in the file
    pub offset: u64,
    pub bytes: &'a [u8],
}

/// The contents of a binary file split into equal-width records
///
/// The set owns the file buffer; records are borrowed views into it.
#[derive(Debug, Clone)]
pub struct RecordSet {
    path: PathBuf,
    record_size: usize,
    buffer: Vec<u8>,
}

impl RecordSet {
    /// Split an in-memory file into records
    ///
    /// Fails without returning any record when the buffer length is not an exact
    /// multiple of `record_size`.
    pub fn from_bytes(
        path: impl Into<PathBuf>,
        buffer: Vec<u8>,
        record_size: usize,
    ) -> DecodeResult<Self> {
        let path = path.into();

        if record_size == 0 {
            return Err(DecodeError::structural("record size must be positive").in_file(&path));
        }

        let remainder = buffer.len() % record_size;
        if remainder != 0 {
            let complete = buffer.len() - remainder;
            return Err(DecodeError::structural(format!(
                "file size {} is not a multiple of the {}-byte record size ({} trailing bytes)",
                buffer.len(),
                record_size,
                remainder
            ))
            .in_file(&path)
            .at_byte(complete as u64)
            .with_bytes(&buffer[complete..]));
        }

        debug!(
            "{} holds {} records of {} bytes",
            path.display(),
            buffer.len() / record_size,
            record_size
        );

        Ok(Self {
            path,
            record_size,
            buffer,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.buffer.len() / self.record_size
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Record at a 0-based position
    pub fn get(&self, index: usize) -> Option<RawRecord<'_>> {
        let start = index.checked_mul(self.record_size)?;
        let end = start.checked_add(self.record_size)?;
        let bytes = self.buffer.get(start..end)?;
        Some(RawRecord {
            index,
            offset: start as u64,
            bytes,
        })
    }

    /// Records in file order
    pub fn iter(&self) -> impl Iterator<Item = RawRecord<'_>> {
        let record_size = self.record_size;
        self.buffer
            .chunks_exact(record_size)
            .enumerate()
            .map(move |(index, bytes)| RawRecord {
                index,
                offset: (index * record_size) as u64,
                bytes,
            })
    }
}

/// Read a binary file from the local filesystem and split it into records
pub fn read_records(path: impl AsRef<Path>, record_size: usize) -> Result<RecordSet> {
    read_records_from(&LocalFileSystem, path, record_size)
}

/// Read a binary file through `source` and split it into records
pub fn read_records_from(
    source: &impl FileSource,
    path: impl AsRef<Path>,
    record_size: usize,
) -> Result<RecordSet> {
    let path = path.as_ref();
    let buffer = source.read_bytes(path)?;

    info!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(RecordSet::from_bytes(path, buffer, record_size)?)
}
