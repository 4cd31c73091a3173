//! Binary record reader
//!
//! Cursor primitives over fixed-size little-endian record buffers, whole-file
//! splitting into records with exact size checking, and the generic table-driven
//! [`decode_record`].

pub mod cursor;
pub mod layout;
pub mod records;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use cursor::{LeScalar, RecordCursor};
pub use layout::{BinaryField, BinaryKind, decode_record, decode_record_with, layout_width};
pub use records::{RawRecord, RecordSet, read_records, read_records_from};
