//! Future cost function cut records
//!
//! A cut is a linear under-estimator of the future cost function:
//! `cost(x) >= intercept + coefficients · x`. The cut file stores cuts in a flat
//! pool of fixed-width records linked into chains by record index.

use crate::constants::cuts::COEFFICIENTS;

/// One cut record as it sits in the pool, including its raw next-index link
#[derive(Debug, Clone, PartialEq)]
pub struct FCFCutRaw {
    /// Raw next-record index, possibly the terminator sentinel
    pub next_index: i32,
    pub iteration: u16,
    /// Owning subsystem or equivalent reservoir
    pub owner: u8,
    pub active: bool,
    /// Right-hand side of the cut
    pub intercept: f64,
    pub coefficients: Box<[f64; COEFFICIENTS]>,
}

impl FCFCutRaw {
    /// Detach the cut from its link, keeping its pool position
    pub fn into_cut(self, position: usize) -> FCFCut {
        FCFCut {
            position,
            iteration: self.iteration,
            owner: self.owner,
            active: self.active,
            intercept: self.intercept,
            coefficients: self.coefficients,
        }
    }
}

/// A decoded cut, owned by its collection
#[derive(Debug, Clone, PartialEq)]
pub struct FCFCut {
    /// Record position in the pool
    pub position: usize,
    pub iteration: u16,
    pub owner: u8,
    pub active: bool,
    pub intercept: f64,
    pub coefficients: Box<[f64; COEFFICIENTS]>,
}

impl FCFCut {
    /// Value of the cut at a system state
    ///
    /// The caller guarantees `state.len() == COEFFICIENTS`.
    pub fn evaluate(&self, state: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(state)
                .map(|(coefficient, x)| coefficient * x)
                .sum::<f64>()
    }

    /// Largest coefficient magnitude
    pub fn max_abs_coefficient(&self) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0_f64, |acc, c| acc.max(c.abs()))
    }
}
