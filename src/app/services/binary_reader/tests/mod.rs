//! Shared fixtures for binary reader tests

use super::layout::BinaryField;


/// Small layout covering every scalar kind: 4 + 8 + 1 + 2 + 8 + 12 + 4 = 39 bytes
pub const SAMPLE_LAYOUT: &[BinaryField] = &[
    BinaryField::i32("code"),
    BinaryField::text("name", 8),
    BinaryField::new("flag", super::layout::BinaryKind::U8),
    BinaryField::new("iteration", super::layout::BinaryKind::U16),
    BinaryField::new("rhs", super::layout::BinaryKind::F64),
    BinaryField::f32_array("levels", 3),
    BinaryField::reserved(4),
];

/// Bytes matching [`SAMPLE_LAYOUT`]
pub fn sample_record(code: i32, name: &str, levels: [f32; 3]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(39);
    bytes.extend_from_slice(&code.to_le_bytes());
    let mut padded = name.as_bytes().to_vec();
    padded.resize(8, b' ');
    bytes.extend_from_slice(&padded);
    bytes.push(1);
    bytes.extend_from_slice(&7u16.to_le_bytes());
    bytes.extend_from_slice(&(-1250.5f64).to_le_bytes());
    for level in levels {
        bytes.extend_from_slice(&level.to_le_bytes());
    }
    bytes.extend_from_slice(&[0xff; 4]);
    bytes
}
