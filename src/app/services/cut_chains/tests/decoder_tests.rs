//! Tests for single cut records and file decoding

use super::*;
use crate::app::adapters::filesystem::MemoryFileSource;
use crate::app::services::cut_chains::decoder::*;
use crate::app::services::cut_chains::ChainHeads;
use crate::error::{DecodeErrorKind, Locator};

#[test]
fn test_decode_cut_header_and_coefficients() {
    let spec = CutSpec::linked_to(7).owner(3).iteration(12).intercept(-4.5);
    let cut = decode_cut(&encode_cut(&spec)).unwrap();

    assert_eq!(cut.next_index, 7);
    assert_eq!(cut.iteration, 12);
    assert_eq!(cut.owner, 3);
    assert!(cut.active);
    assert_eq!(cut.intercept, -4.5);
    assert_eq!(cut.coefficients[0], -2.0);
    assert!(cut.coefficients[1..].iter().all(|c| *c == 0.0));
}

#[test]
fn test_active_flag_outside_zero_one() {
    let mut spec = CutSpec::linked_to(0);
    spec.active = 2;

    let err = decode_cut(&encode_cut(&spec)).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Range);
    assert_eq!(err.field_name(), Some("active"));
    assert_eq!(err.locator(), Locator::Byte(7));
}

#[test]
fn test_non_finite_values_are_rejected() {
    let err = decode_cut(&encode_cut(&CutSpec::linked_to(0).intercept(f64::NAN))).unwrap_err();
    assert_eq!(err.field_name(), Some("intercept"));

    let mut bytes = encode_cut(&CutSpec::linked_to(0));
    bytes[16 + 8 * 3..16 + 8 * 4].copy_from_slice(&f64::INFINITY.to_le_bytes());
    let err = decode_cut(&bytes).unwrap_err();
    assert_eq!(err.field_name(), Some("coefficients"));
    assert_eq!(err.locator(), Locator::Byte(40));
}

#[test]
fn test_wrong_record_length() {
    let bytes = encode_cut(&CutSpec::linked_to(0));
    let err = decode_cut(&bytes[..RECORD_SIZE - 8]).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Structural);
}

#[test]
fn test_bad_record_aborts_file_with_location() {
    let mut bytes = encode_pool(&[CutSpec::linked_to(1), CutSpec::linked_to(0)]);
    bytes[RECORD_SIZE + 7] = 9;

    let source = MemoryFileSource::new().with_file("cortes.dat", bytes);
    let err = CutChainDecoder::default()
        .decode_file_from(&source, "cortes.dat", ChainHeads::Absent)
        .unwrap_err();

    let decode = err.as_decode().unwrap();
    assert_eq!(
        decode.locator(),
        Locator::Record {
            index: 1,
            byte_offset: Some((RECORD_SIZE + 7) as u64)
        }
    );
}

#[test]
fn test_truncated_pool_is_structural() {
    let mut bytes = encode_pool(&[CutSpec::linked_to(0)]);
    bytes.extend_from_slice(&[0; 10]);

    let source = MemoryFileSource::new().with_file("cortes.dat", bytes);
    let err = CutChainDecoder::default()
        .decode_file_from(&source, "cortes.dat", ChainHeads::Absent)
        .unwrap_err();
    assert_eq!(
        err.as_decode().map(|e| e.kind()),
        Some(DecodeErrorKind::Structural)
    );
}
