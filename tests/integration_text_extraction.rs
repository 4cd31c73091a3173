//! Integration tests for reading and extracting fixed-column text files

mod common;

use common::write_temp_file;
use newave_decoder::DecodeErrorKind;
use newave_decoder::app::adapters::filesystem::LocalFileSystem;
use newave_decoder::app::services::field_extraction::{
    FieldSpec, Literal, extract_lines, read_text,
};
use newave_decoder::config::TextEncoding;
use newave_decoder::error::Locator;

const CONFHD: &[FieldSpec] = &[
    FieldSpec::integer("number", 2, 4).positive(),
    FieldSpec::text("name", 6, 17),
    FieldSpec::integer("station", 20, 23),
    FieldSpec::float("initial_volume", 26, 31)
        .in_range(0.0, 100.0)
        .with_default(Literal::Float(100.0)),
];

/// One Latin-1 data line laid out in the columns of `CONFHD`
fn confhd_line(number: &str, name: &[u8], station: &str, volume: &str) -> Vec<u8> {
    let mut line = format!(" {:>3} ", number).into_bytes();
    let mut padded = name.to_vec();
    padded.resize(12, b' ');
    line.extend(padded);
    line.extend(format!("  {:>4}  {:>6}\n", station, volume).into_bytes());
    line
}

fn confhd_file(lines: &[Vec<u8>], header_lines: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    for _ in 0..header_lines {
        bytes.extend_from_slice(b" NUM  NOME         POSTO  V.INIC\n");
    }
    for line in lines {
        bytes.extend_from_slice(line);
    }
    bytes
}

#[test]
fn test_extract_latin1_file() {
    let bytes = confhd_file(
        &[
            confhd_line("1", b"CAMARGOS", "1", "49.10"),
            b"\n".to_vec(),
            confhd_line("275", b"S\xc3O SIM\xc3O", "3", "100.00"),
            confhd_line("6", b"FURNAS", "6", ""),
        ],
        2,
    );
    let (_dir, path) = write_temp_file("confhd.dat", &bytes);

    let contents = read_text(&LocalFileSystem, &path, TextEncoding::Latin1).unwrap();
    let records = extract_lines(&path, &contents, CONFHD, 2).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].float("initial_volume"), Some(49.1));
    assert_eq!(records[1].text("name"), Some("SÃO SIMÃO"));
    assert_eq!(records[1].int("number"), Some(275));
    assert_eq!(records[2].float("initial_volume"), Some(100.0));
}

#[test]
fn test_bad_line_reports_file_and_line() {
    let bytes = confhd_file(
        &[
            confhd_line("1", b"CAMARGOS", "1", "49.10"),
            confhd_line("6", b"FURNAS", "", "55.00"),
        ],
        1,
    );
    let (_dir, path) = write_temp_file("confhd.dat", &bytes);

    let contents = read_text(&LocalFileSystem, &path, TextEncoding::Latin1).unwrap();
    let err = extract_lines(&path, &contents, CONFHD, 1).unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::Field);
    assert_eq!(err.field_name(), Some("station"));
    assert_eq!(err.locator(), Locator::Line(3));
    assert_eq!(err.file(), Some(path.as_path()));
}

#[test]
fn test_out_of_range_value_is_rejected() {
    let bytes = confhd_file(&[confhd_line("6", b"FURNAS", "6", "120.00")], 0);
    let (_dir, path) = write_temp_file("confhd.dat", &bytes);

    let contents = read_text(&LocalFileSystem, &path, TextEncoding::Latin1).unwrap();
    let err = extract_lines(&path, &contents, CONFHD, 0).unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::Range);
    assert_eq!(err.field_name(), Some("initial_volume"));
    assert_eq!(err.locator(), Locator::Line(1));
}
