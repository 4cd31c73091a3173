//! Future cost function cut pool service
//!
//! The cut file is a flat pool of 1664-byte records. Each record carries the
//! position of the next record of its chain, so several independent chains share
//! one pool. This module decodes the pool into an arena of [`FCFCut`]s and
//! rebuilds the chains as ordered lists of arena positions, rejecting
//! out-of-range links, cycles and records claimed by two chains.

use crate::app::models::FCFCut;
use serde::Serialize;

pub mod chains;
pub mod decoder;
pub mod query;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use decoder::{CutChainDecoder, decode_cut, decode_file};
pub use stats::CutStatistics;

/// Chain heads supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainHeads<'a> {
    /// Authoritative head positions, in the order the chains should be reported
    Index(&'a [usize]),
    /// No index available
    Absent,
}

impl<'a> From<Option<&'a [usize]>> for ChainHeads<'a> {
    fn from(heads: Option<&'a [usize]>) -> Self {
        heads.map_or(ChainHeads::Absent, ChainHeads::Index)
    }
}

/// Where the chain heads of a collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadSource {
    /// Supplied index
    Index,
    /// Every record no other record points at
    Unreferenced,
}

/// One chain of cuts, as arena positions in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutChain {
    /// Position of the first record
    pub head: usize,
    /// Owner of the head record
    pub owner: u8,
    /// Iteration of the head record
    pub iteration: u16,
    /// Arena positions, head first
    pub members: Vec<usize>,
}

impl CutChain {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Decoded cut pool
///
/// The arena holds every decoded record at its file position. Chains hold arena
/// positions in decode order and are never re-sorted.
#[derive(Debug, Clone)]
pub struct FCFCutsCollection {
    pub(crate) cuts: Vec<FCFCut>,
    pub(crate) chains: Vec<CutChain>,
    pub(crate) head_source: HeadSource,
}

impl FCFCutsCollection {
    /// Every decoded cut, indexed by file position
    pub fn cuts(&self) -> &[FCFCut] {
        &self.cuts
    }

    pub fn chains(&self) -> &[CutChain] {
        &self.chains
    }

    pub fn head_source(&self) -> HeadSource {
        self.head_source
    }

    /// Number of records in the pool
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Cuts of one chain, head first
    pub fn chain_cuts<'a>(&'a self, chain: &'a CutChain) -> impl Iterator<Item = &'a FCFCut> + 'a {
        chain.members.iter().map(move |&position| &self.cuts[position])
    }

    /// Cuts that belong to some chain, chain by chain
    pub fn chained_cuts(&self) -> impl Iterator<Item = &FCFCut> {
        self.chains.iter().flat_map(move |chain| self.chain_cuts(chain))
    }
}
