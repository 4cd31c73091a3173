//! Integration tests for decoding cut pools from disk and dispatching by name

mod common;

use common::{cut_record, hydro_record, write_temp_file};
use newave_decoder::app::adapters::filesystem::LocalFileSystem;
use newave_decoder::app::services::cut_chains::{CutChainDecoder, decode_file};
use newave_decoder::app::services::format_registry::{DecodedFile, FormatRegistry, dispatch};
use newave_decoder::constants::cuts::COEFFICIENTS;
use newave_decoder::{ChainHeads, DecodeErrorKind, DecoderConfig, HeadSource};

fn three_record_pool() -> Vec<u8> {
    let mut bytes = cut_record(1, 1, true, 100.0);
    bytes.extend(cut_record(0, 1, true, 250.0));
    bytes.extend(cut_record(0, 2, false, 900.0));
    bytes
}

#[test]
fn test_decode_pool_from_disk() {
    let (_dir, path) = write_temp_file("cortes.dat", &three_record_pool());

    let collection = decode_file(&path, ChainHeads::Absent).unwrap();
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.head_source(), HeadSource::Unreferenced);
    assert_eq!(collection.chains()[0].members, vec![0, 1]);
    assert_eq!(collection.chains()[1].members, vec![2]);

    let state = vec![0.0; COEFFICIENTS];
    assert_eq!(collection.water_value(&state).unwrap(), Some(250.0));
}

#[test]
fn test_supplied_heads_from_disk() {
    let (_dir, path) = write_temp_file("cortes.dat", &three_record_pool());

    let decoder = CutChainDecoder::new(DecoderConfig::default().requiring_head_index()).unwrap();
    let collection = decoder
        .decode_file(&path, ChainHeads::Index(&[0, 2]))
        .unwrap();
    assert_eq!(collection.head_source(), HeadSource::Index);
    assert_eq!(collection.chains_for_owner(2).len(), 1);

    assert!(decoder.decode_file(&path, ChainHeads::Absent).is_err());
}

#[test]
fn test_cyclic_pool_from_disk() {
    let mut bytes = Vec::new();
    for _ in 0..5 {
        bytes.extend(cut_record(0, 1, true, 1.0));
    }
    bytes.extend(cut_record(5, 1, true, 1.0));
    let (_dir, path) = write_temp_file("cortes.dat", &bytes);

    let err = decode_file(&path, ChainHeads::Absent).unwrap_err();
    let decode = err.as_decode().expect("decode error");
    assert_eq!(decode.kind(), DecodeErrorKind::Structural);
    assert!(decode.message().contains("record 5"));
    assert_eq!(decode.file(), Some(path.as_path()));
}

#[test]
fn test_dispatch_by_file_name() {
    let (cuts_dir, cuts_path) = write_temp_file("cortes.dat", &three_record_pool());
    let (hydro_dir, hydro_path) = write_temp_file("HIDR.DAT", &hydro_record("FURNAS", 6, 1, &[]));
    let registry = FormatRegistry::standard().unwrap();
    let config = DecoderConfig::default();

    let decoded = dispatch(&registry, &LocalFileSystem, &cuts_path, &config, ChainHeads::Absent).unwrap();
    assert!(matches!(decoded, DecodedFile::CutPool(ref c) if c.chains().len() == 2));

    let decoded = dispatch(&registry, &LocalFileSystem, &hydro_path, &config, ChainHeads::Absent).unwrap();
    assert!(matches!(decoded, DecodedFile::HydroRegistry(ref r) if r.len() == 1));

    drop((cuts_dir, hydro_dir));
}
