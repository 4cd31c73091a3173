//! Shared fixtures for field extraction tests

use super::field_spec::{FieldSpec, Literal};
use std::path::Path;


/// Plant line layout modelled on the configuration text files
///
/// ```text
/// NUM NAME         SS  VOLINI  EXIST
///   6 FURNAS        1   55.20   EX
/// ```
pub const PLANT_LINE: &[FieldSpec] = &[
    FieldSpec::integer("number", 1, 3).positive(),
    FieldSpec::text("name", 5, 16),
    FieldSpec::integer("subsystem", 17, 19).in_range(1.0, 12.0),
    FieldSpec::float("initial_volume", 21, 27)
        .in_range(0.0, 100.0)
        .with_default(Literal::Float(0.0)),
    FieldSpec::text("status", 30, 31).optional(),
];

/// Extended form of [`PLANT_LINE`] with a trailing efficiency column
pub const PLANT_LINE_EXTENDED: &[FieldSpec] = &[
    FieldSpec::integer("number", 1, 3).positive(),
    FieldSpec::text("name", 5, 16),
    FieldSpec::integer("subsystem", 17, 19).in_range(1.0, 12.0),
    FieldSpec::float("initial_volume", 21, 27)
        .in_range(0.0, 100.0)
        .with_default(Literal::Float(0.0)),
    FieldSpec::text("status", 30, 31).optional(),
    FieldSpec::float("efficiency", 33, 38).nonnegative(),
];

pub fn test_path() -> &'static Path {
    Path::new("confhd.dat")
}

/// Build a plant line with every column in place
pub fn plant_line(number: &str, name: &str, subsystem: &str, volume: &str, status: &str) -> String {
    format!(
        "{:>3} {:<12}{:>3} {:>7}  {:<2}",
        number, name, subsystem, volume, status
    )
}
