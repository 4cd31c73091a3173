//! Descriptive statistics over a decoded cut pool

use super::FCFCutsCollection;
use serde::Serialize;

/// Summary of the chained cuts of a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutStatistics {
    /// Cuts that belong to a chain
    pub cut_count: usize,

    /// Chained cuts with the active flag set
    pub active_count: usize,

    pub chain_count: usize,

    /// Records in the pool that no chain reaches
    pub unchained_count: usize,

    /// Smallest intercept, when any cut is chained
    pub min_intercept: Option<f64>,

    /// Largest intercept, when any cut is chained
    pub max_intercept: Option<f64>,

    /// Largest coefficient magnitude
    pub max_abs_coefficient: f64,

    /// Mean coefficient magnitude over all chained cuts
    pub mean_abs_coefficient: f64,
}

impl CutStatistics {
    /// Share of chained cuts that are active, as a percentage
    pub fn active_rate(&self) -> f64 {
        if self.cut_count == 0 {
            0.0
        } else {
            (self.active_count as f64 / self.cut_count as f64) * 100.0
        }
    }
}

impl FCFCutsCollection {
    /// Compute summary statistics
    pub fn cut_statistics(&self) -> CutStatistics {
        let mut cut_count = 0;
        let mut active_count = 0;
        let mut min_intercept: Option<f64> = None;
        let mut max_intercept: Option<f64> = None;
        let mut max_abs_coefficient = 0.0_f64;
        let mut abs_sum = 0.0;
        let mut coefficient_count = 0;

        for cut in self.chained_cuts() {
            cut_count += 1;
            if cut.active {
                active_count += 1;
            }
            min_intercept = Some(min_intercept.map_or(cut.intercept, |m| m.min(cut.intercept)));
            max_intercept = Some(max_intercept.map_or(cut.intercept, |m| m.max(cut.intercept)));
            max_abs_coefficient = max_abs_coefficient.max(cut.max_abs_coefficient());
            abs_sum += cut.coefficients.iter().map(|c| c.abs()).sum::<f64>();
            coefficient_count += cut.coefficients.len();
        }

        CutStatistics {
            cut_count,
            active_count,
            chain_count: self.chains.len(),
            unchained_count: self.cuts.len() - cut_count,
            min_intercept,
            max_intercept,
            max_abs_coefficient,
            mean_abs_coefficient: if coefficient_count == 0 {
                0.0
            } else {
                abs_sum / coefficient_count as f64
            },
        }
    }
}
