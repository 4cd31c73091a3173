//! Pure queries over a decoded cut pool

use super::{CutChain, FCFCutsCollection};
use crate::app::models::FCFCut;
use crate::constants::cuts::COEFFICIENTS;
use crate::{Error, Result};

impl FCFCutsCollection {
    /// Chained cuts whose active flag is set
    pub fn active_cuts(&self) -> impl Iterator<Item = &FCFCut> {
        self.chained_cuts().filter(|cut| cut.active)
    }

    /// Future cost at a system state: the maximum over active cuts
    ///
    /// Returns `None` when no cut is active. `state` must have one component per
    /// cut coefficient.
    pub fn water_value(&self, state: &[f64]) -> Result<Option<f64>> {
        if state.len() != COEFFICIENTS {
            return Err(Error::state_dimension(COEFFICIENTS, state.len()));
        }

        Ok(self
            .active_cuts()
            .map(|cut| cut.evaluate(state))
            .reduce(f64::max))
    }

    /// The active cut that sets the water value at `state`
    pub fn binding_cut(&self, state: &[f64]) -> Result<Option<&FCFCut>> {
        if state.len() != COEFFICIENTS {
            return Err(Error::state_dimension(COEFFICIENTS, state.len()));
        }

        Ok(self
            .active_cuts()
            .map(|cut| (cut, cut.evaluate(state)))
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .map(|(cut, _)| cut))
    }

    /// Chains whose head record belongs to `owner`
    pub fn chains_for_owner(&self, owner: u8) -> Vec<&CutChain> {
        self.chains
            .iter()
            .filter(|chain| chain.owner == owner)
            .collect()
    }

    /// The chain headed at a record position
    pub fn chain(&self, head: usize) -> Option<&CutChain> {
        self.chains.iter().find(|chain| chain.head == head)
    }
}
