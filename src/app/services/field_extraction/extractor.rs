//! Fixed-column record extraction
//!
//! Slices each declared column range out of a text line, trims it, coerces it to
//! the declared type and applies the field's rule. The whole line fails on the
//! first bad field; no partially filled record is ever returned.

use super::field_spec::{Columns, FieldSpec, FieldType, Literal};
use crate::app::models::{Record, Value};
use crate::error::{DecodeError, DecodeResult};
use std::path::Path;
use tracing::debug;

/// Where a line came from, attached to every error raised for it
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    pub file: &'a Path,
    /// 1-based line number
    pub line_number: usize,
}

impl<'a> LineContext<'a> {
    pub fn new(file: &'a Path, line_number: usize) -> Self {
        Self { file, line_number }
    }
}

/// Extract one record from a line
pub fn extract(line: &str, specs: &[FieldSpec], context: &LineContext<'_>) -> DecodeResult<Record> {
    let mut record = Record::with_capacity(specs.len());

    for spec in specs {
        let value = extract_field(line, spec).map_err(|e| {
            e.in_file(context.file)
                .at_line(context.line_number)
                .with_text(line)
        })?;

        if let Some(value) = value {
            record.push(spec.name, value);
        }
    }

    Ok(record)
}

/// Short and extended forms of a layout that share a common prefix
#[derive(Debug, Clone, Copy)]
pub struct VariantLayout<'a> {
    pub short: &'a [FieldSpec],
    pub extended: &'a [FieldSpec],
    /// Lines at least this long (ignoring trailing blanks) use the extended form
    pub extended_min_len: usize,
}

/// A record decoded with one of the two forms of a [`VariantLayout`]
#[derive(Debug, Clone, PartialEq)]
pub enum VariantRecord {
    Short(Record),
    Extended(Record),
}

impl VariantRecord {
    pub fn record(&self) -> &Record {
        match self {
            VariantRecord::Short(record) | VariantRecord::Extended(record) => record,
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, VariantRecord::Extended(_))
    }
}

/// Extract a line whose layout is chosen by its length
pub fn extract_variant(
    line: &str,
    layout: &VariantLayout<'_>,
    context: &LineContext<'_>,
) -> DecodeResult<VariantRecord> {
    let len = line.trim_end().chars().count();

    if len >= layout.extended_min_len {
        extract(line, layout.extended, context).map(VariantRecord::Extended)
    } else {
        extract(line, layout.short, context).map(VariantRecord::Short)
    }
}

/// Extract every data line of a text file
///
/// The first `skip_lines` lines are headers; blank lines are skipped. Line numbers
/// in errors are 1-based positions in `text`.
pub fn extract_lines(
    file: &Path,
    text: &str,
    specs: &[FieldSpec],
    skip_lines: usize,
) -> DecodeResult<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate().skip(skip_lines) {
        if line.trim().is_empty() {
            continue;
        }
        let context = LineContext::new(file, index + 1);
        records.push(extract(line, specs, &context)?);
    }

    debug!(
        "Extracted {} records from {}",
        records.len(),
        file.display()
    );
    Ok(records)
}

fn extract_field(line: &str, spec: &FieldSpec) -> DecodeResult<Option<Value>> {
    if !spec.columns.is_valid() {
        return Err(DecodeError::structural(format!(
            "invalid column range {}-{} in layout",
            spec.columns.start, spec.columns.end
        ))
        .for_field(spec.name));
    }

    let raw = slice_columns(line, spec.columns).trim();

    if raw.is_empty() {
        if spec.required {
            return Err(DecodeError::field(
                spec.name,
                format!(
                    "required value in columns {}-{} is blank",
                    spec.columns.start, spec.columns.end
                ),
            ));
        }
        return Ok(spec.default.map(Literal::to_value));
    }

    let value = coerce(spec, raw)?;
    if let Some(rule) = &spec.rule {
        rule.check(spec.name, &value)?;
    }

    Ok(Some(value))
}

/// Characters in the 1-based inclusive column range; short lines yield what exists
///
/// `columns` must be a valid range.
pub(crate) fn slice_columns(line: &str, columns: Columns) -> &str {
    let byte_at = |column: usize| {
        line.char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    };

    &line[byte_at(columns.start - 1)..byte_at(columns.end)]
}

fn coerce(spec: &FieldSpec, raw: &str) -> DecodeResult<Value> {
    match spec.field_type {
        FieldType::Integer => raw.parse::<i64>().map(Value::Int).map_err(|e| {
            DecodeError::field(
                spec.name,
                format!("invalid integer '{}' ({})", raw, e),
            )
        }),
        FieldType::Float => parse_float(raw).map(Value::Float).ok_or_else(|| {
            DecodeError::field(spec.name, format!("invalid number '{}'", raw))
        }),
        FieldType::Text => Ok(Value::Text(raw.to_string())),
    }
}

/// Parse a finite float, accepting Fortran `D` exponents
fn parse_float(raw: &str) -> Option<f64> {
    let normalized = raw.replace(['D', 'd'], "E");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
