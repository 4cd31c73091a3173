//! Byte builders for synthetic registry and cut files

#![allow(dead_code)]

use newave_decoder::constants::{cuts, hydro};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal plant record: identity, bounds, machine sets and regulation
pub fn hydro_record(name: &str, gauge: i32, subsystem: i32, sets: &[(i32, f32)]) -> Vec<u8> {
    let mut bytes = vec![0u8; hydro::RECORD_SIZE];

    let mut padded = name.as_bytes().to_vec();
    padded.resize(hydro::NAME_WIDTH, b' ');
    bytes[0..12].copy_from_slice(&padded);
    bytes[12..16].copy_from_slice(&gauge.to_le_bytes());
    bytes[16..24].copy_from_slice(b"        ");
    bytes[24..28].copy_from_slice(&subsystem.to_le_bytes());

    // min and max volume
    bytes[40..44].copy_from_slice(&100.0f32.to_le_bytes());
    bytes[44..48].copy_from_slice(&1100.0f32.to_le_bytes());

    bytes[192..196].copy_from_slice(&(sets.len() as i32).to_le_bytes());
    for (i, (units, capacity)) in sets.iter().enumerate() {
        bytes[196 + 4 * i..200 + 4 * i].copy_from_slice(&units.to_le_bytes());
        bytes[216 + 4 * i..220 + 4 * i].copy_from_slice(&capacity.to_le_bytes());
    }

    bytes[460..464].copy_from_slice(b"M   ");
    bytes[484..488].copy_from_slice(&1i32.to_le_bytes());
    bytes
}

/// Blank registry slot
pub fn blank_hydro_record() -> Vec<u8> {
    let mut bytes = vec![0u8; hydro::RECORD_SIZE];
    bytes[0..12].copy_from_slice(b"            ");
    bytes[16..24].copy_from_slice(b"        ");
    bytes[460..464].copy_from_slice(b"    ");
    bytes
}

/// Cut record with a constant first coefficient
pub fn cut_record(next: i32, owner: u8, active: bool, intercept: f64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(cuts::RECORD_SIZE);
    bytes.extend_from_slice(&next.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.push(owner);
    bytes.push(active as u8);
    bytes.extend_from_slice(&intercept.to_le_bytes());
    bytes.extend_from_slice(&(-1.0f64).to_le_bytes());
    bytes.resize(cuts::RECORD_SIZE, 0);
    bytes
}

/// Write `bytes` to `name` inside a fresh temporary directory
pub fn write_temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(bytes).expect("write file");
    (dir, path)
}
