//! Field extraction engine for fixed-column text records
//!
//! Text inputs of the planning model are fixed-column ASCII/Latin-1 lines. Each
//! record type is described once as a table of [`FieldSpec`]s, and [`extract`]
//! turns a line into a [`Record`](crate::app::models::Record) or a
//! [`DecodeError`](crate::error::DecodeError) locating the bad field.
//!
//! The validation helpers in [`validation`] are shared with the binary decoders.

pub mod extractor;
pub mod field_spec;
pub mod text;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use extractor::{
    LineContext, VariantLayout, VariantRecord, extract, extract_lines, extract_variant,
};
pub use field_spec::{Columns, FieldSpec, FieldType, Literal, Rule};
pub use text::read_text;
