//! Decoding of cut records and whole cut pools

use super::chains::link_chains;
use super::{ChainHeads, FCFCutsCollection, HeadSource};
use crate::app::adapters::filesystem::{FileSource, LocalFileSystem};
use crate::app::models::FCFCutRaw;
use crate::app::services::binary_reader::{RecordCursor, RecordSet, read_records_from};
use crate::app::services::field_extraction::validation;
use crate::config::DecoderConfig;
use crate::constants::cuts::{COEFFICIENTS, FLAG_ACTIVE, FLAG_INACTIVE, HEADER_SIZE, RECORD_SIZE};
use crate::error::{DecodeError, DecodeResult};
use crate::Result;
use std::path::Path;
use tracing::info;

/// Decode one 1664-byte cut record
///
/// The next-index is returned raw; it is validated against the pool when chains
/// are linked.
pub fn decode_cut(buffer: &[u8]) -> DecodeResult<FCFCutRaw> {
    if buffer.len() != RECORD_SIZE {
        return Err(DecodeError::structural(format!(
            "cut record has {} bytes, expected {}",
            buffer.len(),
            RECORD_SIZE
        )));
    }

    let mut cursor = RecordCursor::new(buffer);
    let next_index = cursor.read_i32_le()?;
    let iteration = cursor.read_u16_le()?;
    let owner = cursor.read_u8()?;

    let flag_offset = cursor.position();
    let active = match cursor.read_u8()? {
        FLAG_ACTIVE => true,
        FLAG_INACTIVE => false,
        other => {
            return Err(DecodeError::range(
                "active",
                format!("flag value {} is neither 0 nor 1", other),
            )
            .at_byte(flag_offset as u64));
        }
    };

    let intercept_offset = cursor.position();
    let intercept = validation::finite("intercept", cursor.read_f64_le()?)
        .map_err(|e| e.at_byte(intercept_offset as u64))?;

    let coefficients = Box::new(cursor.read_array::<f64, COEFFICIENTS>()?);
    if let Some(bad) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(DecodeError::range(
            "coefficients",
            format!("coefficient {} is not a finite number", bad),
        )
        .at_byte((HEADER_SIZE + bad * 8) as u64));
    }

    Ok(FCFCutRaw {
        next_index,
        iteration,
        owner,
        active,
        intercept,
        coefficients,
    })
}

/// Decoder for whole cut pools
#[derive(Debug, Clone, Default)]
pub struct CutChainDecoder {
    config: DecoderConfig,
}

impl CutChainDecoder {
    /// Create a decoder, validating the configuration
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a cut file from the local filesystem
    pub fn decode_file(
        &self,
        path: impl AsRef<Path>,
        heads: ChainHeads<'_>,
    ) -> Result<FCFCutsCollection> {
        self.decode_file_from(&LocalFileSystem, path, heads)
    }

    /// Decode a cut file read through `source`
    pub fn decode_file_from(
        &self,
        source: &impl FileSource,
        path: impl AsRef<Path>,
        heads: ChainHeads<'_>,
    ) -> Result<FCFCutsCollection> {
        let records = read_records_from(source, path, RECORD_SIZE)?;
        Ok(self.decode_records(&records, heads)?)
    }

    /// Decode every record of a pool and link the chains
    ///
    /// Any failing record, bad link or cycle aborts the whole pool.
    pub fn decode_records(
        &self,
        records: &RecordSet,
        heads: ChainHeads<'_>,
    ) -> DecodeResult<FCFCutsCollection> {
        let raw = records
            .iter()
            .map(|record| {
                decode_cut(record.bytes).map_err(|e| {
                    e.in_record(record.index, record.offset)
                        .in_file(records.path())
                })
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        let (chains, head_source) =
            link_chains(&raw, heads, &self.config).map_err(|e| e.in_file(records.path()))?;

        let cuts = raw
            .into_iter()
            .enumerate()
            .map(|(position, cut)| cut.into_cut(position))
            .collect();

        let collection = FCFCutsCollection {
            cuts,
            chains,
            head_source,
        };

        info!(
            "Decoded {} cuts in {} chains from {} (heads: {})",
            collection.len(),
            collection.chains.len(),
            records.path().display(),
            match head_source {
                HeadSource::Index => "index",
                HeadSource::Unreferenced => "unreferenced records",
            }
        );

        Ok(collection)
    }
}

/// Decode a cut file from the local filesystem with the default configuration
pub fn decode_file(path: impl AsRef<Path>, heads: ChainHeads<'_>) -> Result<FCFCutsCollection> {
    CutChainDecoder::default().decode_file(path, heads)
}
