//! Hydro plant registry record
//!
//! One [`HydroPlantRecord`] per 792-byte slot of the plant registry. The slot
//! position is the plant number assigned by the planning model, so blank slots
//! are kept as records too.

use crate::constants::hydro::{
    MONTHS, POLYNOMIAL_DEGREE_SLOTS, TAILRACE_COEFFICIENTS, TAILRACE_FAMILY_WIDTH,
};
use serde::Serialize;

/// Reservoir regulation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regulation {
    Monthly,
    Weekly,
    Daily,
    /// Blank code, used by run-of-river plants and empty slots
    Unspecified,
}

impl Regulation {
    /// Parse the one-letter regulation code (`M`, `S`, `D` or blank)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" | "m" => Some(Regulation::Monthly),
            "S" | "s" => Some(Regulation::Weekly),
            "D" | "d" => Some(Regulation::Daily),
            "" => Some(Regulation::Unspecified),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Regulation::Monthly => "M",
            Regulation::Weekly => "S",
            Regulation::Daily => "D",
            Regulation::Unspecified => "",
        }
    }
}

/// How the hydraulic losses value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LossKind {
    Unset,
    /// Percentage of the gross head
    Percent,
    /// Absolute value in metres
    Metres,
}

impl LossKind {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LossKind::Unset),
            1 => Some(LossKind::Percent),
            2 => Some(LossKind::Metres),
            _ => None,
        }
    }
}

/// A group of identical generating units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachineSet {
    /// Number of units in the set
    pub units: i32,
    /// Effective capacity of each unit (MW)
    pub unit_capacity_mw: f64,
    /// Nominal head (m)
    pub nominal_head_m: f64,
    /// Nominal turbined flow per unit (m³/s)
    pub nominal_flow_m3s: i32,
}

impl MachineSet {
    /// Installed capacity of the whole set (MW)
    pub fn capacity_mw(&self) -> f64 {
        self.units as f64 * self.unit_capacity_mw
    }
}

/// One tailrace polynomial family: coefficients plus the downstream reference level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TailraceFamily {
    pub coefficients: [f64; TAILRACE_FAMILY_WIDTH - 1],
    pub reference_level: f64,
}

impl TailraceFamily {
    /// Tailrace elevation for a given total outflow
    pub fn elevation_at_outflow(&self, outflow: f64) -> f64 {
        evaluate_polynomial(&self.coefficients, outflow)
    }
}

/// Decoded plant registry slot
///
/// Floating-point fields are stored in the file as single precision and widened
/// here; widening is exact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydroPlantRecord {
    // Identity
    pub name: String,
    pub gauge_code: i32,
    pub gauge_extended_code: String,
    pub subsystem: i32,
    pub company: i32,
    pub downstream_plant: i32,
    pub diversion_plant: i32,

    // Storage and elevation bounds
    /// Minimum storage (hm³)
    pub min_volume: f64,
    /// Maximum storage (hm³)
    pub max_volume: f64,
    pub spillway_volume: f64,
    pub diversion_volume: f64,
    /// Minimum upstream elevation (m)
    pub min_elevation: f64,
    /// Maximum upstream elevation (m)
    pub max_elevation: f64,

    // Polynomials, lowest degree first
    pub volume_elevation: [f64; POLYNOMIAL_DEGREE_SLOTS],
    pub elevation_area: [f64; POLYNOMIAL_DEGREE_SLOTS],

    /// Monthly evaporation coefficients (mm), January first
    pub evaporation: [i32; MONTHS],

    /// Machine sets, at most five; only the declared sets are kept
    pub machine_sets: Vec<MachineSet>,

    /// Raw tailrace block: 6 families of 5 coefficients followed by a reference level
    pub tailrace_polynomial: Vec<f64>,
    pub tailrace_family_count: usize,

    // Operating parameters
    pub specific_productivity: f64,
    pub losses: f64,
    pub loss_kind: LossKind,
    pub average_tailrace_elevation: f64,
    pub spillage_affects_tailrace: bool,
    /// Forced outage rate (%)
    pub forced_outage_rate: f64,
    /// Scheduled outage rate (%)
    pub scheduled_outage_rate: f64,
    pub turbine_kind: i32,
    pub historical_min_outflow: i32,
    pub regulation: Regulation,
    pub minimum_outflow: f64,
    pub maximum_outflow: f64,
    pub nominal_efficiency: f64,
    pub pumping: bool,
    pub pumping_consumption: f64,
    pub in_operation: bool,
    pub revision: i32,
}

impl HydroPlantRecord {
    /// Check if the slot is unused
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.gauge_code == 0
    }

    /// Upstream elevation (m) for a stored volume (hm³)
    pub fn elevation_at_volume(&self, volume: f64) -> f64 {
        evaluate_polynomial(&self.volume_elevation, volume)
    }

    /// Reservoir surface area (km²) at an upstream elevation (m)
    pub fn area_at_elevation(&self, elevation: f64) -> f64 {
        evaluate_polynomial(&self.elevation_area, elevation)
    }

    /// Storage between the minimum and maximum operating levels (hm³)
    pub fn useful_volume(&self) -> f64 {
        self.max_volume - self.min_volume
    }

    /// Total installed capacity over all machine sets (MW)
    pub fn installed_capacity(&self) -> f64 {
        self.machine_sets.iter().map(MachineSet::capacity_mw).sum()
    }

    /// Total number of generating units
    pub fn unit_count(&self) -> i32 {
        self.machine_sets.iter().map(|set| set.units).sum()
    }

    /// The tailrace families in use, in file order
    pub fn tailrace_families(&self) -> Vec<TailraceFamily> {
        self.tailrace_polynomial
            .chunks_exact(TAILRACE_FAMILY_WIDTH)
            .take(self.tailrace_family_count)
            .map(|chunk| {
                let mut coefficients = [0.0; TAILRACE_FAMILY_WIDTH - 1];
                coefficients.copy_from_slice(&chunk[..TAILRACE_FAMILY_WIDTH - 1]);
                TailraceFamily {
                    coefficients,
                    reference_level: chunk[TAILRACE_FAMILY_WIDTH - 1],
                }
            })
            .collect()
    }
}

/// Evaluate a polynomial whose coefficients are ordered lowest degree first
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * x + coefficient)
}

const _: () = assert!(TAILRACE_COEFFICIENTS % TAILRACE_FAMILY_WIDTH == 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_polynomial() {
        // 2 + 3x + x^2 at x = 2
        assert_eq!(evaluate_polynomial(&[2.0, 3.0, 1.0, 0.0], 2.0), 12.0);
        assert_eq!(evaluate_polynomial(&[], 5.0), 0.0);
    }

    #[test]
    fn test_regulation_codes() {
        assert_eq!(Regulation::from_code("M "), Some(Regulation::Monthly));
        assert_eq!(Regulation::from_code("S"), Some(Regulation::Weekly));
        assert_eq!(Regulation::from_code("D"), Some(Regulation::Daily));
        assert_eq!(Regulation::from_code("    "), Some(Regulation::Unspecified));
        assert_eq!(Regulation::from_code("X"), None);
        assert_eq!(Regulation::Monthly.code(), "M");
    }

    #[test]
    fn test_machine_set_capacity() {
        let set = MachineSet {
            units: 4,
            unit_capacity_mw: 152.5,
            nominal_head_m: 90.0,
            nominal_flow_m3s: 190,
        };
        assert_eq!(set.capacity_mw(), 610.0);
    }
}
