//! Table-driven decoding of binary records
//!
//! A binary layout is an ordered `&'static [BinaryField]` table whose widths add
//! up to the record width. [`decode_record`] walks the table with a
//! [`RecordCursor`] and collects every non-reserved field into a [`Record`].

use super::cursor::RecordCursor;
use crate::app::models::{Record, Value};
use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};

/// On-disk representation of a binary field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKind {
    U8,
    U16,
    I32,
    F32,
    F64,
    /// Fixed-width string
    Text(usize),
    I32Array(usize),
    F32Array(usize),
    F64Array(usize),
    /// Padding, skipped and never decoded
    Reserved(usize),
}

impl BinaryKind {
    /// Width on disk in bytes
    pub const fn width(&self) -> usize {
        match *self {
            BinaryKind::U8 => 1,
            BinaryKind::U16 => 2,
            BinaryKind::I32 | BinaryKind::F32 => 4,
            BinaryKind::F64 => 8,
            BinaryKind::Text(width) | BinaryKind::Reserved(width) => width,
            BinaryKind::I32Array(count) | BinaryKind::F32Array(count) => count * 4,
            BinaryKind::F64Array(count) => count * 8,
        }
    }
}

/// One named field of a binary layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryField {
    pub name: &'static str,
    pub kind: BinaryKind,
}

impl BinaryField {
    pub const fn new(name: &'static str, kind: BinaryKind) -> Self {
        Self { name, kind }
    }

    pub const fn i32(name: &'static str) -> Self {
        Self::new(name, BinaryKind::I32)
    }

    pub const fn f32(name: &'static str) -> Self {
        Self::new(name, BinaryKind::F32)
    }

    pub const fn text(name: &'static str, width: usize) -> Self {
        Self::new(name, BinaryKind::Text(width))
    }

    pub const fn i32_array(name: &'static str, count: usize) -> Self {
        Self::new(name, BinaryKind::I32Array(count))
    }

    pub const fn f32_array(name: &'static str, count: usize) -> Self {
        Self::new(name, BinaryKind::F32Array(count))
    }

    pub const fn reserved(width: usize) -> Self {
        Self::new("reserved", BinaryKind::Reserved(width))
    }
}

/// Total width of a layout in bytes
pub const fn layout_width(layout: &[BinaryField]) -> usize {
    let mut width = 0;
    let mut i = 0;
    while i < layout.len() {
        width += layout[i].kind.width();
        i += 1;
    }
    width
}

/// Decode one record buffer against a layout with the default configuration
pub fn decode_record(buffer: &[u8], layout: &[BinaryField]) -> DecodeResult<Record> {
    decode_record_with(buffer, layout, &DecoderConfig::default())
}

/// Decode one record buffer against a layout
///
/// The buffer length must equal the layout width.
pub fn decode_record_with(
    buffer: &[u8],
    layout: &[BinaryField],
    config: &DecoderConfig,
) -> DecodeResult<Record> {
    let expected = layout_width(layout);
    if buffer.len() != expected {
        return Err(DecodeError::structural(format!(
            "record buffer has {} bytes, layout expects {}",
            buffer.len(),
            expected
        )));
    }

    let mut cursor = RecordCursor::with_encoding(buffer, config.text_encoding);
    let mut record = Record::with_capacity(layout.len());

    for field in layout {
        let value = read_field(&mut cursor, field.kind, config.trim_padding)
            .map_err(|e| e.for_field(field.name))?;
        if let Some(value) = value {
            record.push(field.name, value);
        }
    }

    Ok(record)
}

fn read_field(
    cursor: &mut RecordCursor<'_>,
    kind: BinaryKind,
    trim_padding: bool,
) -> DecodeResult<Option<Value>> {
    let value = match kind {
        BinaryKind::U8 => Value::Int(cursor.read_u8()?.into()),
        BinaryKind::U16 => Value::Int(cursor.read_u16_le()?.into()),
        BinaryKind::I32 => Value::Int(cursor.read_i32_le()?.into()),
        BinaryKind::F32 => Value::Float(cursor.read_f32_le()?.into()),
        BinaryKind::F64 => Value::Float(cursor.read_f64_le()?),
        BinaryKind::Text(width) => Value::Text(cursor.read_fixed_string(width, trim_padding)?),
        BinaryKind::I32Array(count) => Value::IntArray(
            cursor
                .read_vec::<i32>(count)?
                .into_iter()
                .map(i64::from)
                .collect(),
        ),
        BinaryKind::F32Array(count) => Value::FloatArray(
            cursor
                .read_vec::<f32>(count)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        BinaryKind::F64Array(count) => Value::FloatArray(cursor.read_vec::<f64>(count)?),
        BinaryKind::Reserved(width) => {
            cursor.skip(width)?;
            return Ok(None);
        }
    };

    Ok(Some(value))
}
