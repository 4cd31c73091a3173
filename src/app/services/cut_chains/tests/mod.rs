//! Shared fixtures for cut pool tests

use crate::app::services::binary_reader::RecordSet;
use crate::constants::cuts::{COEFFICIENTS, RECORD_SIZE};

pub mod decoder_tests;

/// Header fields of a synthetic cut record
#[derive(Debug, Clone, Copy)]
pub struct CutSpec {
    pub next: i32,
    pub iteration: u16,
    pub owner: u8,
    pub active: u8,
    pub intercept: f64,
    /// Value of the first coefficient; the rest are zero
    pub first_coefficient: f64,
}

impl CutSpec {
    pub fn linked_to(next: i32) -> Self {
        Self {
            next,
            iteration: 1,
            owner: 1,
            active: 1,
            intercept: 1000.0,
            first_coefficient: -2.0,
        }
    }

    pub fn owner(mut self, owner: u8) -> Self {
        self.owner = owner;
        self
    }

    pub fn iteration(mut self, iteration: u16) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn intercept(mut self, intercept: f64) -> Self {
        self.intercept = intercept;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = 0;
        self
    }
}

/// Encode one 1664-byte cut record
pub fn encode_cut(spec: &CutSpec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(RECORD_SIZE);
    bytes.extend_from_slice(&spec.next.to_le_bytes());
    bytes.extend_from_slice(&spec.iteration.to_le_bytes());
    bytes.push(spec.owner);
    bytes.push(spec.active);
    bytes.extend_from_slice(&spec.intercept.to_le_bytes());
    bytes.extend_from_slice(&spec.first_coefficient.to_le_bytes());
    for _ in 1..COEFFICIENTS {
        bytes.extend_from_slice(&0.0f64.to_le_bytes());
    }
    assert_eq!(bytes.len(), RECORD_SIZE);
    bytes
}

/// Encode a whole pool
pub fn encode_pool(specs: &[CutSpec]) -> Vec<u8> {
    specs.iter().flat_map(encode_cut).collect()
}

/// A record set over a synthetic pool
pub fn pool(specs: &[CutSpec]) -> RecordSet {
    RecordSet::from_bytes("cortes.dat", encode_pool(specs), RECORD_SIZE).unwrap()
}
