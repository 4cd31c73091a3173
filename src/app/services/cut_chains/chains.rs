//! Chain reconstruction over the decoded pool
//!
//! Links are validated before any traversal. Each traversal tracks which chain
//! claimed every visited record, so a record seen twice in the same chain is a
//! cycle and a record seen from two chains is an overlap.

use super::{ChainHeads, CutChain, HeadSource};
use crate::app::models::FCFCutRaw;
use crate::config::{DecoderConfig, HeadPolicy};
use crate::constants::cuts::RECORD_SIZE;
use crate::error::{DecodeError, DecodeResult};
use tracing::{debug, trace, warn};

fn record_start(position: usize) -> u64 {
    (position * RECORD_SIZE) as u64
}

/// Check every next-index lies in `[terminator, record_count)`
pub fn validate_links(raw: &[FCFCutRaw], terminator: i32) -> DecodeResult<()> {
    let count = raw.len();

    for (position, cut) in raw.iter().enumerate() {
        let next = cut.next_index;
        let in_pool = next >= 0 && (next as usize) < count;
        if next != terminator && !in_pool {
            return Err(DecodeError::structural(format!(
                "next-index {} outside [{}, {})",
                next, terminator, count
            ))
            .for_field("next_index")
            .in_record(position, record_start(position)));
        }
    }

    Ok(())
}

/// Rebuild the chains of a pool whose links have been validated
pub fn link_chains(
    raw: &[FCFCutRaw],
    heads: ChainHeads<'_>,
    config: &DecoderConfig,
) -> DecodeResult<(Vec<CutChain>, HeadSource)> {
    let terminator = config.terminator_sentinel;
    validate_links(raw, terminator)?;

    let (head_positions, head_source) = match heads {
        ChainHeads::Index(positions) => {
            if let Some(&bad) = positions.iter().find(|&&head| head >= raw.len()) {
                return Err(DecodeError::structural(format!(
                    "chain head {} outside the {}-record pool",
                    bad,
                    raw.len()
                )));
            }
            let mut seen = vec![false; raw.len()];
            for &head in positions {
                if std::mem::replace(&mut seen[head], true) {
                    return Err(DecodeError::structural(format!(
                        "chain head {} is listed more than once in the head index",
                        head
                    )));
                }
            }
            (positions.to_vec(), HeadSource::Index)
        }
        ChainHeads::Absent => {
            if config.head_policy == HeadPolicy::RequireIndex {
                return Err(DecodeError::structural(
                    "no chain-head index supplied and the configuration requires one",
                ));
            }
            let heads = unreferenced(raw, terminator);
            warn!(
                "No chain-head index supplied; using {} unreferenced records as chain heads",
                heads.len()
            );
            (heads, HeadSource::Unreferenced)
        }
    };

    let mut linker = Linker::new(raw, terminator);
    for &head in &head_positions {
        linker.walk(head)?;
    }

    let unreached: Vec<usize> = (0..raw.len())
        .filter(|&position| linker.claimed_by[position].is_none())
        .collect();

    if !unreached.is_empty() {
        match head_source {
            HeadSource::Index => debug!(
                "{} records are not reachable from the supplied chain heads",
                unreached.len()
            ),
            HeadSource::Unreferenced => {
                // Records no unreferenced head reaches lead into a headless cycle
                for position in unreached {
                    if linker.claimed_by[position].is_none() {
                        linker.walk(position)?;
                    }
                }
            }
        }
    }

    Ok((linker.chains, head_source))
}

/// Positions that no other record links to, in file order
fn unreferenced(raw: &[FCFCutRaw], terminator: i32) -> Vec<usize> {
    let mut referenced = vec![false; raw.len()];
    for cut in raw {
        if cut.next_index != terminator {
            referenced[cut.next_index as usize] = true;
        }
    }

    referenced
        .iter()
        .enumerate()
        .filter(|&(_, &is_referenced)| !is_referenced)
        .map(|(position, _)| position)
        .collect()
}

struct Linker<'a> {
    raw: &'a [FCFCutRaw],
    terminator: i32,
    /// Chain that claimed each record
    claimed_by: Vec<Option<usize>>,
    chains: Vec<CutChain>,
}

impl<'a> Linker<'a> {
    fn new(raw: &'a [FCFCutRaw], terminator: i32) -> Self {
        Self {
            raw,
            terminator,
            claimed_by: vec![None; raw.len()],
            chains: Vec::new(),
        }
    }

    fn walk(&mut self, head: usize) -> DecodeResult<()> {
        let chain_id = self.chains.len();
        let mut members = Vec::new();
        let mut current = head;

        loop {
            match self.claimed_by[current] {
                Some(owner) if owner == chain_id => {
                    return Err(DecodeError::structural(format!(
                        "cyclic cut chain: record {} repeats in the chain headed at record {}",
                        current, head
                    ))
                    .in_record(current, record_start(current)));
                }
                Some(owner) => {
                    return Err(DecodeError::structural(format!(
                        "record {} belongs to the chains headed at records {} and {}",
                        current, self.chains[owner].head, head
                    ))
                    .in_record(current, record_start(current)));
                }
                None => {}
            }

            if members.len() >= self.raw.len() {
                return Err(DecodeError::structural(format!(
                    "cyclic cut chain: chain headed at record {} exceeds the {}-record pool",
                    head,
                    self.raw.len()
                ))
                .in_record(current, record_start(current)));
            }

            self.claimed_by[current] = Some(chain_id);
            members.push(current);

            let next = self.raw[current].next_index;
            if next == self.terminator {
                break;
            }
            current = next as usize;
        }

        trace!("Chain headed at {} has {} cuts", head, members.len());

        let head_cut = &self.raw[head];
        self.chains.push(CutChain {
            head,
            owner: head_cut.owner,
            iteration: head_cut.iteration,
            members,
        });
        Ok(())
    }
}
